//! Remote lookups: related ids for a focal query, and protein annotations.

mod error;
mod fetch;
mod pubchem;
mod string_db;
mod uniprot;

use log::{debug, warn};
use serde_json::json;

pub use error::FetchError;
use fetch::Body;
pub use uniprot::Annotation;

use crate::components::force_graph::NetworkData;

pub const DEFAULT_PROTEIN: &str = "P69905";

/// Endpoints and limits for the remote lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceConfig {
	pub string_db_url: String,
	pub pubchem_url: String,
	pub uniprot_url: String,
	pub max_neighbors: usize,
}

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			string_db_url: "https://string-db.org/api".into(),
			pubchem_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug".into(),
			uniprot_url: "https://rest.uniprot.org/uniprotkb".into(),
			max_neighbors: 5,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
	/// Protein-protein interaction partners from STRING.
	Interactions,
	/// Compounds matching a name from PubChem.
	Compounds,
}

impl Lookup {
	pub fn default_query(self) -> &'static str {
		match self {
			Lookup::Interactions => DEFAULT_PROTEIN,
			Lookup::Compounds => "Hydroxyurea",
		}
	}

	fn request_url(self, config: &SourceConfig, encoded_query: &str) -> String {
		match self {
			Lookup::Interactions => string_db::request_url(&config.string_db_url, encoded_query),
			Lookup::Compounds => pubchem::request_url(&config.pubchem_url, encoded_query),
		}
	}

	fn parse(self, body: &str, limit: usize) -> Result<Vec<String>, FetchError> {
		match self {
			Lookup::Interactions => string_db::parse(body, limit),
			Lookup::Compounds => pubchem::parse(body, limit),
		}
	}

	/// Height in pixels of the network canvas for this lookup.
	pub fn canvas_height(self) -> f64 {
		match self {
			Lookup::Interactions => 300.0,
			Lookup::Compounds => 200.0,
		}
	}

	/// The network to draw for a successful lookup. A compound search with
	/// no hits draws nothing.
	pub fn network(self, data: NetworkData) -> Option<NetworkData> {
		match self {
			Lookup::Compounds if data.neighbors.is_empty() => None,
			_ => Some(data),
		}
	}

	/// Resolves the body of a finished request. A body that does not parse
	/// is reported by its HTTP status when the request itself failed.
	fn resolve(self, query: &str, body: &Body, limit: usize) -> Result<NetworkData, FetchError> {
		match self.parse(&body.text, limit) {
			Ok(neighbors) => Ok(NetworkData {
				focal: query.to_string(),
				neighbors,
			}),
			Err(_) if !body.ok => Err(FetchError::Status(body.status)),
			Err(err) => Err(err),
		}
	}
}

/// Pretty-printed JSON of an interaction lookup.
pub fn interaction_summary(data: &NetworkData) -> String {
	let value = json!({
		"protein_id": data.focal,
		"interactions": data.neighbors,
	});
	serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn resolve_annotation(protein_id: &str, body: &Body) -> Result<Annotation, FetchError> {
	if !body.ok {
		return Err(FetchError::Status(body.status));
	}
	uniprot::parse(&body.text, protein_id)
}

/// Fetches the UniProtKB entry for `protein_id`.
pub async fn annotate(protein_id: &str, config: &SourceConfig) -> Result<Annotation, FetchError> {
	let url = uniprot::request_url(&config.uniprot_url, &fetch::encode(protein_id));
	debug!("fetching {url}");
	let body = fetch::get(&url).await?;
	if !body.ok {
		warn!("{url} responded with HTTP {}", body.status);
	}
	resolve_annotation(protein_id, &body)
}

pub async fn lookup(
	kind: Lookup,
	query: &str,
	config: &SourceConfig,
) -> Result<NetworkData, FetchError> {
	let url = kind.request_url(config, &fetch::encode(query));
	debug!("fetching {url}");
	let body = fetch::get(&url).await?;
	if !body.ok {
		warn!("{url} responded with HTTP {}", body.status);
	}
	kind.resolve(query, &body, config.max_neighbors)
}
