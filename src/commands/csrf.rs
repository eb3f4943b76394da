//! CSRF Token Lookup

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Hidden form field rendered by `{% csrf_token %}`
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const CSRF_COOKIE: &str = "csrftoken";

pub trait CsrfSource {
    fn token(&self) -> Option<String>;
}

/// Reads the token from the page: form field first, then the cookie
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCsrf;

impl CsrfSource for DocumentCsrf {
    fn token(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;

        let from_field = document
            .query_selector(&format!("[name={}]", CSRF_FIELD))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .filter(|v| !v.is_empty());

        from_field.or_else(|| {
            let cookies = document.dyn_ref::<web_sys::HtmlDocument>()?.cookie().ok()?;
            cookie_value(&cookies, CSRF_COOKIE)
        })
    }
}

/// Find and percent-decode a cookie in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=t0k%2Ben; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("t0k+en"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        let cookies = "csrftoken_old=stale;csrftoken=fresh";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("fresh"));
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
