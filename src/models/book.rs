//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Store-assigned identifier, unique and never reused
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Publication year
    pub year: i32,
    /// ISBN, or the placeholder "N/A" when unknown
    pub isbn: String,
}

/// Create book request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    /// Required, must be non-empty
    pub title: Option<String>,
    /// Required, must be non-empty
    pub author: Option<String>,
    /// Defaults to the current calendar year
    pub year: Option<i32>,
    /// Defaults to "N/A"
    pub isbn: Option<String>,
}

/// Update book request
///
/// Only fields carrying a non-empty value overwrite the stored record;
/// absent fields, empty strings and a zero year are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub isbn: Option<String>,
}
