use std::env;
use std::fmt;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "imageUploader";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend endpoints for the HTTP collaborators.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub upload_url: String,
    pub upload_endpoint: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("upload_url", &self.upload_url)
            .field("upload_endpoint", &self.upload_endpoint)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    /// Runtime environment first, then values baked in at build time. The wasm build
    /// has no process environment, so only the latter apply there.
    pub fn from_env() -> Self {
        Self::from_lookup(layered(|key| env::var(key).ok(), build_time))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_url = get("EVENTLY_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let upload_url = get("EVENTLY_UPLOAD_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("{}/api/uploadthing", api_url));
        let upload_endpoint =
            get("EVENTLY_UPLOAD_ENDPOINT").unwrap_or_else(|| DEFAULT_UPLOAD_ENDPOINT.to_string());
        let timeout_secs = match get("EVENTLY_HTTP_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!(value = %raw, "EVENTLY_HTTP_TIMEOUT_SECS is not a positive integer, using default");
                    DEFAULT_TIMEOUT_SECS
                }
            },
        };

        Self {
            api_url,
            upload_url,
            upload_endpoint,
            api_token: get("EVENTLY_API_TOKEN"),
            timeout_secs,
        }
    }
}

/// `EVENTLY_*` values captured by `option_env!` when the crate was compiled.
fn build_time(key: &str) -> Option<String> {
    let value = match key {
        "EVENTLY_API_URL" => option_env!("EVENTLY_API_URL"),
        "EVENTLY_UPLOAD_URL" => option_env!("EVENTLY_UPLOAD_URL"),
        "EVENTLY_UPLOAD_ENDPOINT" => option_env!("EVENTLY_UPLOAD_ENDPOINT"),
        "EVENTLY_API_TOKEN" => option_env!("EVENTLY_API_TOKEN"),
        "EVENTLY_HTTP_TIMEOUT_SECS" => option_env!("EVENTLY_HTTP_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_string)
}

fn layered(
    primary: impl Fn(&str) -> Option<String>,
    fallback: impl Fn(&str) -> Option<String>,
) -> impl Fn(&str) -> Option<String> {
    move |key| primary(key).or_else(|| fallback(key))
}
