//! Diesel ORM records for the identity_cards table.

use diesel::prelude::*;

use crate::schema;

/// Identity card record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::identity_cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CardRecord {
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
    pub raw_text: Option<String>,
    pub file_sha256: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// New identity card for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::identity_cards)]
pub struct NewCard<'a> {
    pub id: &'a str,
    pub filename: &'a str,
    pub card_type: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub contact: Option<&'a str>,
    pub aadhaar_number: Option<&'a str>,
    pub pan_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub pincode: Option<&'a str>,
    pub raw_text: Option<&'a str>,
    pub file_sha256: &'a str,
    pub created_at: &'a str,
    pub updated_at: Option<&'a str>,
}
