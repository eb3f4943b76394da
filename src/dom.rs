//! Delegated Event Helpers
//!
//! Containers carry a single listener; the clicked element is resolved
//! through a data attribute on the nearest ancestor.

use wasm_bindgen::JsCast;

pub const FOLDER_KEY_ATTR: &str = "data-folder-key";
pub const QUOTE_ID_ATTR: &str = "data-quote-id";

/// Value of `attr` on the event target or its closest ancestor carrying it
pub fn closest_data(ev: &web_sys::Event, attr: &str) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let owner = target.closest(&format!("[{}]", attr)).ok()??;
    owner.get_attribute(attr)
}

/// `(quote id, selected folder id)` from a change event on a row dropdown
pub fn quote_folder_selection(ev: &web_sys::Event) -> Option<(u64, String)> {
    let select = ev.target()?.dyn_into::<web_sys::HtmlSelectElement>().ok()?;
    let quote_id = select.get_attribute(QUOTE_ID_ATTR)?.parse::<u64>().ok()?;
    Some((quote_id, select.value()))
}
