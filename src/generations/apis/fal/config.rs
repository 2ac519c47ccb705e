use std::time::Duration;

use crate::{app::env::Envy, generations::models::output_mapping::OutputMapping};

#[derive(Debug, Clone)]
pub struct FalConfig {
    pub key: String,
    pub queue_url: String,
    pub model_id: String,
    pub output_mapping: OutputMapping,
    pub poll_interval: Duration,
}

impl FalConfig {
    pub fn from_envy(envy: &Envy) -> Self {
        Self {
            key: envy.fal_key.to_string(),
            queue_url: envy.fal_queue_url.trim_end_matches('/').to_string(),
            model_id: envy.fal_model_id.trim_matches('/').to_string(),
            output_mapping: OutputMapping {
                node: envy.fal_output_node.to_string(),
                index: envy.fal_output_image_index,
            },
            poll_interval: Duration::from_millis(envy.fal_poll_interval_ms),
        }
    }

    pub fn submit_url(&self) -> String {
        format!("{}/{}", self.queue_url, self.model_id)
    }

    /// Queue requests are addressed by `owner/app`, without the model's
    /// trailing path.
    pub fn app_id(&self) -> String {
        self.model_id
            .split('/')
            .take(2)
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn status_url(&self, request_id: &str) -> String {
        format!("{}/status", self.request_url(request_id))
    }

    pub fn response_url(&self, request_id: &str) -> String {
        self.request_url(request_id)
    }

    fn request_url(&self, request_id: &str) -> String {
        format!("{}/{}/requests/{}", self.queue_url, self.app_id(), request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FalConfig {
        FalConfig {
            key: "key".to_string(),
            queue_url: "https://queue.fal.run".to_string(),
            model_id: "comfy/RhizoNymph/sketch".to_string(),
            output_mapping: OutputMapping::default(),
            poll_interval: Duration::from_millis(500),
        }
    }

    #[test]
    fn urls_follow_the_queue_layout() {
        let config = config();

        assert_eq!(config.submit_url(), "https://queue.fal.run/comfy/RhizoNymph/sketch");
        assert_eq!(config.app_id(), "comfy/RhizoNymph");
        assert_eq!(
            config.status_url("abc"),
            "https://queue.fal.run/comfy/RhizoNymph/requests/abc/status"
        );
        assert_eq!(
            config.response_url("abc"),
            "https://queue.fal.run/comfy/RhizoNymph/requests/abc"
        );
    }

    #[test]
    fn envy_values_are_normalised() {
        let envy: Envy = envy::from_iter(vec![
            ("FAL_KEY".to_string(), "key".to_string()),
            ("FAL_QUEUE_URL".to_string(), "http://localhost:9000/".to_string()),
            ("FAL_MODEL_ID".to_string(), "/owner/app/".to_string()),
            ("FAL_OUTPUT_NODE".to_string(), "7".to_string()),
            ("FAL_POLL_INTERVAL_MS".to_string(), "25".to_string()),
        ])
        .unwrap();
        let config = FalConfig::from_envy(&envy);

        assert_eq!(config.submit_url(), "http://localhost:9000/owner/app");
        assert_eq!(config.output_mapping.node, "7");
        assert_eq!(config.poll_interval, Duration::from_millis(25));
    }
}
