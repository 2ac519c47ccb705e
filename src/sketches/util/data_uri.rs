use regex::Regex;

lazy_static! {
    pub static ref DATA_URI_REGEX: Regex =
        Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,(?P<data>.+)$").unwrap();
}

pub fn png_data_uri(base64_png: &str) -> String {
    format!("data:image/png;base64,{}", base64_png)
}

/// Returns the base64 payload of a data URI, or the trimmed input when it is
/// already bare base64.
pub fn base64_payload(value: &str) -> &str {
    let value = value.trim();

    match DATA_URI_REGEX.captures(value).and_then(|c| c.name("data")) {
        Some(data) => data.as_str(),
        None => value,
    }
}
