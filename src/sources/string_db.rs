//! STRING protein-protein interaction partners.

use serde::Deserialize;

use super::error::FetchError;

#[derive(Deserialize)]
struct Interaction {
	#[serde(rename = "stringId_B")]
	partner: String,
}

pub fn request_url(base: &str, encoded_query: &str) -> String {
	format!("{base}/json/network?identifiers={encoded_query}")
}

/// The partner ids of the first `limit` interactions, in response order.
pub fn parse(body: &str, limit: usize) -> Result<Vec<String>, FetchError> {
	let interactions: Vec<Interaction> = serde_json::from_str(body)?;
	Ok(interactions
		.into_iter()
		.take(limit)
		.map(|i| i.partner)
		.collect())
}
