use serde_json::Value;

/// Where the image URL lives in a provider result:
/// `outputs[node].images[index].url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMapping {
    pub node: String,
    pub index: usize,
}

impl Default for OutputMapping {
    fn default() -> Self {
        Self {
            node: "20".to_string(),
            index: 0,
        }
    }
}

impl OutputMapping {
    pub fn extract_url(&self, result: &Value) -> Option<String> {
        let url = result
            .get("outputs")?
            .get(self.node.as_str())?
            .get("images")?
            .get(self.index)?
            .get("url")?
            .as_str()?;

        match url.trim().is_empty() {
            true => None,
            false => Some(url.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_default_node() {
        let result = json!({
            "outputs": {
                "20": { "images": [{ "url": "https://cdn/a.png" }, { "url": "https://cdn/b.png" }] }
            }
        });

        assert_eq!(
            OutputMapping::default().extract_url(&result).as_deref(),
            Some("https://cdn/a.png")
        );
    }

    #[test]
    fn honours_configured_node_and_index() {
        let result = json!({
            "outputs": {
                "20": { "images": [{ "url": "https://cdn/a.png" }] },
                "9": { "images": [{ "url": "https://cdn/x.png" }, { "url": "https://cdn/y.png" }] }
            }
        });
        let mapping = OutputMapping {
            node: "9".to_string(),
            index: 1,
        };

        assert_eq!(mapping.extract_url(&result).as_deref(), Some("https://cdn/y.png"));
    }

    #[test]
    fn ill_shaped_results_yield_nothing() {
        let mapping = OutputMapping::default();

        for result in [
            json!({}),
            json!({ "outputs": {} }),
            json!({ "outputs": { "20": { "images": [] } } }),
            json!({ "outputs": { "20": { "images": [{ "url": "" }] } } }),
            json!({ "outputs": { "20": { "images": [{ "url": 42 }] } } }),
            json!({ "outputs": { "20": { "images": "nope" } } }),
        ] {
            assert_eq!(mapping.extract_url(&result), None, "{}", result);
        }
    }
}
