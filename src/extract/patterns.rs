//! Regex rules for pulling identity fields out of OCR text.
//!
//! OCR output from scanned cards is noisy, so every extractor validates
//! its match before accepting it. Aadhaar numbers must be exactly 12
//! digits once whitespace is stripped; phone numbers must be Indian
//! mobiles (leading 6-9), which also keeps Aadhaar fragments from
//! matching as phones.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CardType, ExtractedFields};

static AADHAAR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // 1234 5678 9012
        Regex::new(r"\b\d{4}\s*\d{4}\s*\d{4}\b").unwrap(),
        // 123456789012
        Regex::new(r"\b\d{12}\b").unwrap(),
    ]
});

static PAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{5}\d{4}[A-Z]\b").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Indian mobile with optional country prefix
        Regex::new(r"\b(?:\+91|91)?[-.\s]?[6-9]\d{9}\b").unwrap(),
        // Bare 10 digit number
        Regex::new(r"\b\d{10}\b").unwrap(),
    ]
});

static PINCODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{6}\b").unwrap());

static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)name[\s:]+([A-Za-z][A-Za-z ]{1,49})").unwrap(),
        Regex::new(r"नाम[\s:]+([A-Za-z][A-Za-z ]{1,49})").unwrap(),
    ]
});

/// Extract an Aadhaar number: 12 digits, possibly space-grouped.
pub fn extract_aadhaar(text: &str) -> Option<String> {
    for pattern in AADHAAR_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let digits: String = m.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            if digits.len() == 12 && digits.chars().all(|c| c.is_ascii_digit()) {
                return Some(digits);
            }
        }
    }
    None
}

/// Extract a PAN number (five letters, four digits, one letter).
pub fn extract_pan(text: &str) -> Option<String> {
    PAN_PATTERN.find(text).map(|m| m.as_str().to_uppercase())
}

/// Extract the first email address.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_lowercase())
}

/// Extract an Indian mobile number, normalized to bare 10 digits.
pub fn extract_phone(text: &str) -> Option<String> {
    for pattern in PHONE_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
            if digits.len() == 10 && matches!(digits.as_bytes()[0], b'6'..=b'9') {
                return Some(digits);
            }
            if digits.len() == 12 && digits.starts_with("91") {
                let rest = digits[2..].to_string();
                if matches!(rest.as_bytes()[0], b'6'..=b'9') {
                    return Some(rest);
                }
            }
        }
    }
    None
}

/// Extract a 6-digit pincode. Indian pincodes never start with 0.
pub fn extract_pincode(text: &str) -> Option<String> {
    PINCODE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|s| !s.starts_with('0'))
        .map(str::to_string)
}

/// Extract a person's name following a "Name:"-style label.
pub fn extract_name(text: &str) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let name = caps[1].trim();
            let compact: String = name.chars().filter(|c| *c != ' ').collect();
            if name.len() >= 2 && compact.chars().all(char::is_alphabetic) {
                return Some(title_case(name));
            }
        }
    }
    None
}

/// Classify the card type from keywords in the text.
pub fn detect_card_type(text: &str) -> CardType {
    let lower = text.to_lowercase();

    if ["aadhaar", "आधार", "uidai"].iter().any(|k| lower.contains(k)) {
        CardType::Aadhaar
    } else if ["income tax", "pan card", "permanent account"]
        .iter()
        .any(|k| lower.contains(k))
    {
        CardType::Pan
    } else if ["election", "voter", "electoral"]
        .iter()
        .any(|k| lower.contains(k))
    {
        CardType::VoterId
    } else if ["driving", "license", "transport"]
        .iter()
        .any(|k| lower.contains(k))
    {
        CardType::DrivingLicense
    } else {
        CardType::Unknown
    }
}

/// Run every extractor over the text.
pub fn extract_all(text: &str) -> ExtractedFields {
    ExtractedFields {
        card_type: detect_card_type(text),
        name: extract_name(text),
        email: extract_email(text),
        contact: extract_phone(text),
        aadhaar_number: extract_aadhaar(text),
        pan_number: extract_pan(text),
        pincode: extract_pincode(text),
    }
}

/// Title-case a name: first letter of each word uppercased, rest lowered.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aadhaar_spaced() {
        let text = "Aadhaar No: 1234 5678 9012";
        assert_eq!(extract_aadhaar(text).as_deref(), Some("123456789012"));
    }

    #[test]
    fn test_aadhaar_compact() {
        assert_eq!(
            extract_aadhaar("UID 123456789012 issued").as_deref(),
            Some("123456789012")
        );
    }

    #[test]
    fn test_aadhaar_rejects_short() {
        assert_eq!(extract_aadhaar("code 1234 5678"), None);
    }

    #[test]
    fn test_pan() {
        assert_eq!(
            extract_pan("PAN: ABCDE1234F for tax").as_deref(),
            Some("ABCDE1234F")
        );
        assert_eq!(extract_pan("abcde1234f"), None); // lowercase never printed on cards
    }

    #[test]
    fn test_email_lowercased() {
        assert_eq!(
            extract_email("Mail: Asha.Patel@Example.COM").as_deref(),
            Some("asha.patel@example.com")
        );
    }

    #[test]
    fn test_phone_plain() {
        assert_eq!(
            extract_phone("Mob: 9876543210").as_deref(),
            Some("9876543210")
        );
    }

    #[test]
    fn test_phone_country_prefix_stripped() {
        assert_eq!(
            extract_phone("Mob: 919876543210").as_deref(),
            Some("9876543210")
        );
    }

    #[test]
    fn test_phone_rejects_bad_leading_digit() {
        // 10 digits starting with 1 is not an Indian mobile
        assert_eq!(extract_phone("ref 1234567890"), None);
    }

    #[test]
    fn test_pincode() {
        assert_eq!(extract_pincode("PIN 560034 Bangalore").as_deref(), Some("560034"));
    }

    #[test]
    fn test_pincode_rejects_leading_zero() {
        assert_eq!(extract_pincode("code 012345"), None);
    }

    #[test]
    fn test_name_title_cased() {
        assert_eq!(
            extract_name("Name: ASHA PATEL\nDOB: 01/01/1990").as_deref(),
            Some("Asha Patel")
        );
    }

    #[test]
    fn test_name_rejects_digits() {
        assert_eq!(extract_name("Name: 1234"), None);
    }

    #[test]
    fn test_detect_aadhaar() {
        assert_eq!(
            detect_card_type("Government of India UIDAI Aadhaar"),
            CardType::Aadhaar
        );
    }

    #[test]
    fn test_detect_pan() {
        assert_eq!(
            detect_card_type("INCOME TAX DEPARTMENT Permanent Account Number"),
            CardType::Pan
        );
    }

    #[test]
    fn test_detect_voter_and_license() {
        assert_eq!(
            detect_card_type("Election Commission of India"),
            CardType::VoterId
        );
        assert_eq!(
            detect_card_type("Driving Licence Transport Dept"),
            CardType::DrivingLicense
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_card_type("random text"), CardType::Unknown);
    }

    #[test]
    fn test_extract_all_sample_card() {
        let text = "\
--- Page 1 ---
Government of India
UIDAI
Name: asha patel
DOB: 01/01/1990
Mob: +91 9876543210
asha@example.com
1234 5678 9012
Address: 12 MG Road, Bangalore 560034";

        let fields = extract_all(text);
        assert_eq!(fields.card_type, CardType::Aadhaar);
        assert_eq!(fields.name.as_deref(), Some("Asha Patel"));
        assert_eq!(fields.email.as_deref(), Some("asha@example.com"));
        assert_eq!(fields.contact.as_deref(), Some("9876543210"));
        assert_eq!(fields.aadhaar_number.as_deref(), Some("123456789012"));
        assert_eq!(fields.pincode.as_deref(), Some("560034"));
        assert_eq!(fields.pan_number, None);
    }
}
