//! Response envelope types.
//!
//! Most endpoints return the bare resource or a bare array. The public
//! document listing wraps its results instead:
//! ```json
//! { "data": [ ... ] }
//! ```

use serde::{Deserialize, Serialize};

/// Envelope around a list of records. Keys other than `data` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// The wrapped records. Missing or `null` means no records.
    #[serde(default)]
    pub data: Option<Vec<T>>,
}

impl<T> DataEnvelope<T> {
    /// Unwrap the records, treating a missing array as empty.
    pub fn into_data(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}
