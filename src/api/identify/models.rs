//! Data models for the part identification API

use serde::{Deserialize, Serialize};

/// Identification request
///
/// `image` is a caller-supplied image reference: either a data URL
/// (`data:image/jpeg;base64,...`) or a plain HTTP(S) URL. No format or
/// size validation happens here; the provider sees it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifyRequest {
    #[serde(default)]
    pub image: String,
}

/// Normalized identification result
///
/// Exactly the two keys the caller contract promises. Missing keys in the
/// provider answer default to `None`, and `None` always serializes as an
/// explicit `null` (the keys are never skipped). Unknown provider keys are
/// dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartIdentification {
    #[serde(rename = "pecaIdentificada", default)]
    pub peca_identificada: Option<String>,
    #[serde(rename = "modeloVeiculo", default)]
    pub modelo_veiculo: Option<String>,
}

/// The only error body shape this service emits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
