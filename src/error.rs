/// Fault code PUG REST uses when a lookup matched nothing.
pub const FAULT_NOT_FOUND: &str = "PUGREST.NotFound";

#[derive(thiserror::Error, Debug)]
pub enum PubChemError {
    #[error("request to {url} failed{}: {detail}", status_suffix(.status, .fault))]
    Transport {
        url: String,
        status: Option<u16>,
        fault: Option<String>,
        detail: String,
    },
    #[error("invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("compound not found: {name}")]
    CompoundNotFound { name: String },
    #[error("unexpected response shape in {context}: {detail}")]
    UnexpectedShape {
        context: &'static str,
        detail: String,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn status_suffix(status: &Option<u16>, fault: &Option<String>) -> String {
    match (status, fault) {
        (Some(s), Some(f)) => format!(" (HTTP {}, {})", s, f),
        (Some(s), None) => format!(" (HTTP {})", s),
        (None, Some(f)) => format!(" ({})", f),
        (None, None) => String::new(),
    }
}

impl PubChemError {
    pub fn shape(context: &'static str, detail: impl Into<String>) -> Self {
        PubChemError::UnexpectedShape {
            context,
            detail: detail.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PubChemError::CompoundNotFound { .. })
    }

    /// Only network/service failures are worth retrying; the rest are
    /// deterministic for the same input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PubChemError::Transport { .. })
    }

    /// True only for PubChem's own "nothing matched" fault. A bare 404 (wrong
    /// base URL, proxy error page) stays a transport problem.
    pub(crate) fn is_upstream_not_found(&self) -> bool {
        match self {
            PubChemError::Transport { fault, .. } => fault.as_deref() == Some(FAULT_NOT_FOUND),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PubChemError>;
