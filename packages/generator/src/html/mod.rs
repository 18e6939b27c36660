//! HTML output generation for the constitution page.

mod card;
mod page;
pub mod tags;

pub use card::{card_view, references_card, translate_toggle_id};
pub use page::{render_page, save_html};
