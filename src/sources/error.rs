use thiserror::Error;

/// Failure to turn a remote lookup into neighbor ids.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("network request failed: {0}")]
	Network(String),

	#[error("server responded with HTTP {0}")]
	Status(u16),

	#[error("unexpected response: {0}")]
	Json(#[from] serde_json::Error),
}
