//! PubChem compounds matching a name.

use serde::Deserialize;

use super::error::FetchError;

#[derive(Deserialize)]
struct CompoundResponse {
	#[serde(rename = "PC_Compounds", default)]
	compounds: Vec<Compound>,
}

#[derive(Deserialize)]
struct Compound {
	id: CompoundId,
}

#[derive(Deserialize)]
struct CompoundId {
	id: Cid,
}

#[derive(Deserialize)]
struct Cid {
	cid: u64,
}

pub fn request_url(base: &str, encoded_query: &str) -> String {
	format!("{base}/compound/name/{encoded_query}/JSON")
}

/// Cids of the first `limit` compounds. A response without `PC_Compounds`
/// (PubChem's fault object) yields no compounds.
pub fn parse(body: &str, limit: usize) -> Result<Vec<String>, FetchError> {
	let response: CompoundResponse = serde_json::from_str(body)?;
	Ok(response
		.compounds
		.into_iter()
		.take(limit)
		.map(|c| c.id.id.cid.to_string())
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn takes_cids() {
		let body = r#"{"PC_Compounds": [
			{"id": {"id": {"cid": 3657}}, "atoms": {"aid": [1, 2]}},
			{"id": {"id": {"cid": 12345}}}
		]}"#;
		assert_eq!(parse(body, 5).unwrap(), ["3657", "12345"]);
	}

	#[test]
	fn fault_means_no_compounds() {
		let body = r#"{"Fault": {"Code": "PUGREST.NotFound", "Message": "No CID found"}}"#;
		assert!(parse(body, 5).unwrap().is_empty());
	}

	#[test]
	fn malformed_body_is_an_error() {
		assert!(matches!(parse("<html>", 5), Err(FetchError::Json(_))));
	}

	#[test]
	fn builds_compound_url() {
		assert_eq!(
			request_url("https://pubchem.ncbi.nlm.nih.gov/rest/pug", "Hydroxyurea"),
			"https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/Hydroxyurea/JSON"
		);
	}
}
