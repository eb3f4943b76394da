//! View Models
//!
//! Pure functions from API data to what the components display.
//! No DOM access here; markup lives in `components`.

mod folders;
mod table;

pub use folders::*;
pub use table::*;
