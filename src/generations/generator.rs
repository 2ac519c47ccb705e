use futures::future::BoxFuture;

use crate::app::models::api_error::ApiError;

use super::models::generation_request::GenerationRequest;

/// The remote image-generation backend. Resolves to the URL of the produced
/// image.
pub trait ImageGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> BoxFuture<'a, Result<String, ApiError>>;
}
