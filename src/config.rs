use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov/rest";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Where the client sends requests and how long a single GET may take.
///
/// PUG REST lives under `{api_base}/pug` and PUG View under
/// `{api_base}/pug_view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn pug_rest_base(&self) -> String {
        format!("{}/pug", self.api_base)
    }

    pub fn pug_view_base(&self) -> String {
        format!("{}/pug_view", self.api_base)
    }
}
