use serde::{Deserialize, Serialize};

/// Body of a paste. `image` carries an externally copied image as a data URI
/// or bare base64; without it the shared clipboard slot is pasted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasteDto {
    pub image: Option<String>,
}
