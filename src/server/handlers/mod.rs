//! Request handlers for the card API.

mod cards;
mod meta;
mod types;

pub use cards::{get_card, list_cards, upload_card};
pub use meta::{docs_page, health_check, root_info};
pub use types::{CardResponse, ErrorResponse, ListQuery, OcrResponse};
