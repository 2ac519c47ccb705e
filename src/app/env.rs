use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub fal_key: String,
    #[serde(default = "default_fal_queue_url")]
    pub fal_queue_url: String,
    #[serde(default = "default_fal_model_id")]
    pub fal_model_id: String,
    #[serde(default = "default_fal_output_node")]
    pub fal_output_node: String,
    #[serde(default)]
    pub fal_output_image_index: usize,
    #[serde(default = "default_fal_poll_interval_ms")]
    pub fal_poll_interval_ms: u64,

    /// Static password for the pane grid. Unset or empty disables the gate.
    pub access_password: Option<String>,

    #[serde(default = "default_canvas_size")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_size")]
    pub canvas_height: u32,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_rate_limit_per_sec")]
    pub rate_limit_per_sec: u64,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_fal_queue_url() -> String {
    "https://queue.fal.run".to_string()
}

fn default_fal_model_id() -> String {
    "comfy/RhizoNymph/sketch".to_string()
}

fn default_fal_output_node() -> String {
    "20".to_string()
}

fn default_fal_poll_interval_ms() -> u64 {
    500
}

fn default_canvas_size() -> u32 {
    500
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_rate_limit_per_sec() -> u64 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_fill_everything_but_the_key() {
        let envy: Envy = envy::from_iter(vars(&[("FAL_KEY", "secret")])).unwrap();

        assert_eq!(envy.fal_key, "secret");
        assert_eq!(envy.app_env, "development");
        assert_eq!(envy.port, None);
        assert_eq!(envy.fal_queue_url, "https://queue.fal.run");
        assert_eq!(envy.fal_model_id, "comfy/RhizoNymph/sketch");
        assert_eq!(envy.fal_output_node, "20");
        assert_eq!(envy.fal_output_image_index, 0);
        assert_eq!(envy.fal_poll_interval_ms, 500);
        assert_eq!(envy.access_password, None);
        assert_eq!((envy.canvas_width, envy.canvas_height), (500, 500));
    }

    #[test]
    fn overrides_are_read_from_uppercase_vars() {
        let envy: Envy = envy::from_iter(vars(&[
            ("FAL_KEY", "secret"),
            ("PORT", "8080"),
            ("FAL_OUTPUT_NODE", "9"),
            ("FAL_OUTPUT_IMAGE_INDEX", "2"),
            ("ACCESS_PASSWORD", "letmein"),
            ("CANVAS_WIDTH", "256"),
        ]))
        .unwrap();

        assert_eq!(envy.port, Some(8080));
        assert_eq!(envy.fal_output_node, "9");
        assert_eq!(envy.fal_output_image_index, 2);
        assert_eq!(envy.access_password.as_deref(), Some("letmein"));
        assert_eq!(envy.canvas_width, 256);
        assert_eq!(envy.canvas_height, 500);
    }

    #[test]
    fn missing_key_is_an_error() {
        assert!(envy::from_iter::<_, Envy>(vars(&[("PORT", "3000")])).is_err());
    }
}
