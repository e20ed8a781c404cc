pub mod validate;

pub use validate::{validate_upload, ValidationError};
