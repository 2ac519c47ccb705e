use futures::{future::BoxFuture, FutureExt};
use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    app::models::api_error::ApiError,
    generations::{
        errors::GenerationsApiError, generator::ImageGenerator,
        models::generation_request::GenerationRequest,
    },
};

use super::{
    config::FalConfig,
    enums::fal_request_status::FalRequestStatus,
    models::input_spec::{InputSpec, BATCH_SIZE},
    structs::{fal_queue_response::FalQueueResponse, fal_status_response::FalStatusResponse},
};

/// Client for the fal queue: submit, poll until completed, fetch the result.
pub struct FalClient {
    client: reqwest::Client,
    config: FalConfig,
}

impl FalClient {
    pub fn new(config: FalConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn generate_image(&self, request: &GenerationRequest) -> Result<String, ApiError> {
        let input_spec = provide_input_spec(request)?;
        tracing::debug!(
            "submitting request {} for pane {} to {}",
            request.id,
            request.pane_id,
            self.config.model_id
        );

        let queued = self.submit(&input_spec).await?;
        let status_url = queued
            .status_url
            .clone()
            .unwrap_or_else(|| self.config.status_url(&queued.request_id));
        let response_url = queued
            .response_url
            .clone()
            .unwrap_or_else(|| self.config.response_url(&queued.request_id));

        self.await_request_completion(&queued.request_id, &status_url)
            .await?;

        let result: Value = self.get_result(&response_url).await?;
        tracing::debug!("result for request {}: {}", request.id, result);

        match self.config.output_mapping.extract_url(&result) {
            Some(url) => Ok(url),
            None => {
                tracing::error!("no image url found in result for request {}", request.id);
                Err(GenerationsApiError::NoImageUrl.value())
            }
        }
    }

    async fn submit(&self, input_spec: &InputSpec) -> Result<FalQueueResponse, ApiError> {
        let result = self
            .client
            .post(self.config.submit_url())
            .header(header::AUTHORIZATION, self.authorization())
            .json(input_spec)
            .send()
            .await;

        read_json(result, "submit").await
    }

    async fn await_request_completion(
        &self,
        request_id: &str,
        status_url: &str,
    ) -> Result<(), ApiError> {
        let mut logged: usize = 0;

        loop {
            let status = self.get_status(status_url).await?;

            if let Some(logs) = &status.logs {
                for log in logs.iter().skip(logged) {
                    tracing::info!("[{}] {}", request_id, log.message);
                }
                logged = logged.max(logs.len());
            }

            if status.status == FalRequestStatus::Completed.value() {
                return Ok(());
            }

            if status.status == FalRequestStatus::InProgress.value() {
                tracing::debug!("request {} in progress", request_id);
            } else if let Some(position) = status.queue_position {
                tracing::debug!("request {} queued at position {}", request_id, position);
            } else {
                tracing::debug!("waiting for request {} ({})", request_id, status.status);
            }

            sleep(self.config.poll_interval).await;
        }
    }

    async fn get_status(&self, status_url: &str) -> Result<FalStatusResponse, ApiError> {
        let result = self
            .client
            .get(status_url)
            .query(&[("logs", "1")])
            .header(header::AUTHORIZATION, self.authorization())
            .send()
            .await;

        read_json(result, "get_status").await
    }

    async fn get_result(&self, response_url: &str) -> Result<Value, ApiError> {
        let result = self
            .client
            .get(response_url)
            .header(header::AUTHORIZATION, self.authorization())
            .send()
            .await;

        read_json(result, "get_result").await
    }

    fn authorization(&self) -> String {
        format!("Key {}", self.config.key)
    }
}

impl ImageGenerator for FalClient {
    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> BoxFuture<'a, Result<String, ApiError>> {
        self.generate_image(request).boxed()
    }
}

async fn read_json<T: DeserializeOwned>(
    result: Result<reqwest::Response, reqwest::Error>,
    context: &str,
) -> Result<T, ApiError> {
    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::warn!("{} (1): {:?}", context, e);
            return Err(GenerationsApiError::GenerationFailed.value());
        }
    };

    let status = res.status();
    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} (2): {:?}", context, e);
            return Err(GenerationsApiError::GenerationFailed.value());
        }
    };

    if !status.is_success() {
        tracing::warn!("{} (3): {} {:?}", context, status, text);
        return Err(GenerationsApiError::GenerationFailed.value());
    }

    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(_) => {
            tracing::warn!("{} (4): {:?}", context, text);
            Err(GenerationsApiError::GenerationFailed.value())
        }
    }
}

fn provide_input_spec(request: &GenerationRequest) -> Result<InputSpec, ApiError> {
    Ok(InputSpec {
        cliptextencode_text: request.prompt.to_string(),
        ksampler_seed: request.seed,
        ksampler_steps: request.steps,
        ksampler_cfg: request.cfg,
        ksampler_denoise: request.denoise,
        loadimagefromurl_fal_url: request.image.to_data_uri()?,
        controlnetapplyadvanced_strength: request.strength,
        emptylatentimage_batch_size: BATCH_SIZE,
    })
}
