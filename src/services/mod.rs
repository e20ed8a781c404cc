pub mod card;

pub use card::{CardService, ServiceError};
