//! JSON bodies shared by the ledger endpoints.

use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// The body returned after a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Created {
    /// The ID the database generated for the new record.
    pub id: DatabaseId,
}

/// A human-readable outcome, used for successful updates and deletes as well
/// as validation and not-found errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The body for storage failures, carrying the database's own error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
