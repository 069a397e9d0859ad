//! Signature artifact value object

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encoded signature image, carried as a PNG data URL
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureArtifact(String);

impl SignatureArtifact {
    /// Wrap PNG bytes
    pub fn from_png(png: &[u8]) -> Self {
        Self(format!("{}{}", PNG_DATA_URL_PREFIX, BASE64.encode(png)))
    }

    pub fn as_data_url(&self) -> &str {
        &self.0
    }

    /// Decode back to PNG bytes
    pub fn png_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        let payload = self.0.strip_prefix(PNG_DATA_URL_PREFIX).unwrap_or(&self.0);
        BASE64.decode(payload)
    }

    /// Length of the data URL
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.len() <= PNG_DATA_URL_PREFIX.len()
    }
}

// Data URLs run to tens of kilobytes; keep Debug output short.
impl fmt::Debug for SignatureArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignatureArtifact({} bytes)", self.0.len())
    }
}
