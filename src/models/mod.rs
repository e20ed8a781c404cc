//! Data models for idscan.

mod card;

pub use card::{CardType, ExtractedFields, IdentityCard};
