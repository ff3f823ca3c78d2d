//! Photographer entity model.

use serde::{Deserialize, Serialize};

/// Photographer record as exchanged over the API.
///
/// All fields are strings and default to empty when absent from a request
/// body; responses always serialize all nine keys. Only `username`, `email`,
/// `phone`, and `gender` are persisted by the CRUD operations: `firstname`,
/// `lastname`, `city`, and `birthdate` have columns no operation touches,
/// and `address` has no column at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photographer {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub city: String,
    pub gender: String,
    pub birthdate: String,
}
