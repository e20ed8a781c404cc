//! Wire types for the card API.

use serde::{Deserialize, Serialize};

use crate::models::IdentityCard;

/// A card as presented over the API. Timestamps are RFC 3339 strings.
#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub id: String,
    pub filename: String,
    pub card_type: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub file_sha256: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<IdentityCard> for CardResponse {
    fn from(card: IdentityCard) -> Self {
        Self {
            id: card.id,
            filename: card.filename,
            card_type: card.card_type.as_str().to_string(),
            name: card.name,
            email: card.email,
            contact: card.contact,
            aadhaar_number: card.aadhaar_number,
            pan_number: card.pan_number,
            address: card.address,
            city: card.city,
            state: card.state,
            pincode: card.pincode,
            file_sha256: card.file_sha256,
            created_at: card.created_at.to_rfc3339(),
            updated_at: card.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Envelope returned by the upload endpoint.
///
/// A failed OCR run (readable PDF, no recognizable text) is reported as
/// `success: false` with a 200 status; transport-level problems use error
/// statuses instead.
#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CardResponse>,
    /// Wall-clock processing time in seconds, rounded to two decimals.
    pub processing_time: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Query parameters for card listings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
}
