//! Identity card domain models.
//!
//! Cards are identified by UUID and carry the fields parsed out of the
//! OCR text, plus a content hash of the stored upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of identity document, detected from keywords in the OCR text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Aadhaar,
    Pan,
    VoterId,
    DrivingLicense,
    Unknown,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::VoterId => "voter_id",
            Self::DrivingLicense => "driving_license",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "aadhaar" => Some(Self::Aadhaar),
            "pan" => Some(Self::Pan),
            "voter_id" => Some(Self::VoterId),
            "driving_license" => Some(Self::DrivingLicense),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl Default for CardType {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Structured fields parsed out of raw OCR text.
///
/// All fields are optional; extraction is best-effort. Validation rules:
/// aadhaar is exactly 12 digits, pan matches the 5+4+1 format, contact is
/// a bare 10-digit Indian mobile number, pincode is 6 digits without a
/// leading zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub card_type: CardType,
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
    pub pincode: Option<String>,
}

/// A processed identity card record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityCard {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Original filename of the upload.
    pub filename: String,
    /// Detected card type.
    pub card_type: CardType,
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
    /// Address fields exist in the schema but have no extractor yet.
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    /// Full OCR output the fields were parsed from.
    pub raw_text: Option<String>,
    /// SHA-256 of the stored upload content.
    pub file_sha256: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl IdentityCard {
    /// Create a new card record from extraction output.
    pub fn new(
        filename: String,
        file_sha256: String,
        fields: ExtractedFields,
        raw_text: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            filename,
            card_type: fields.card_type,
            name: fields.name,
            email: fields.email,
            contact: fields.contact,
            aadhaar_number: fields.aadhaar_number,
            pan_number: fields.pan_number,
            address: None,
            city: None,
            state: None,
            pincode: fields.pincode,
            raw_text: Some(raw_text),
            file_sha256,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_round_trip() {
        for ty in [
            CardType::Aadhaar,
            CardType::Pan,
            CardType::VoterId,
            CardType::DrivingLicense,
            CardType::Unknown,
        ] {
            assert_eq!(CardType::from_str(ty.as_str()), Some(ty));
        }
        assert_eq!(CardType::from_str("passport"), None);
    }

    #[test]
    fn test_new_card_carries_fields() {
        let fields = ExtractedFields {
            card_type: CardType::Aadhaar,
            name: Some("Asha Patel".to_string()),
            aadhaar_number: Some("123456789012".to_string()),
            ..Default::default()
        };
        let card = IdentityCard::new(
            "card.pdf".to_string(),
            "abc123".to_string(),
            fields,
            "raw".to_string(),
        );

        assert_eq!(card.card_type, CardType::Aadhaar);
        assert_eq!(card.name.as_deref(), Some("Asha Patel"));
        assert_eq!(card.aadhaar_number.as_deref(), Some("123456789012"));
        assert_eq!(card.id.len(), 36);
        assert!(card.updated_at.is_none());
    }
}
