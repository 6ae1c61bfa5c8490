#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

#[derive(Debug, Clone)]
pub struct GenerateFromIngredientsInput {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateFromImageInput {
    pub image: ImagePayload,
}

/// At least one of `ingredients`/`image` must be present; the service rejects
/// the call before any provider traffic otherwise.
#[derive(Debug, Clone)]
pub struct GenerateHybridInput {
    pub ingredients: Vec<String>,
    pub image: Option<ImagePayload>,
}
