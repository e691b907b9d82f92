//! UI Components
//!
//! Leptos components making up the grocery list page.

mod header;
mod add_item;
mod search_item;
mod content;
mod line_item;
mod footer;

pub use header::Header;
pub use add_item::AddItem;
pub use search_item::SearchItem;
pub use content::Content;
pub use line_item::LineItem;
pub use footer::Footer;
