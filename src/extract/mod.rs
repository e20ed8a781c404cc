//! Structured field extraction from OCR text.

mod patterns;

pub use patterns::{
    detect_card_type, extract_aadhaar, extract_all, extract_email, extract_name, extract_pan,
    extract_phone, extract_pincode,
};
