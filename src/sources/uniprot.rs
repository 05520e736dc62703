//! UniProtKB protein annotations.

use serde::Deserialize;
use serde_json::{Value, json};

use super::error::FetchError;
use crate::components::bar_chart::BarChartData;

const LABEL_CHARS: usize = 20;

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct Entry {
	protein_description: Option<Description>,
	genes: Vec<Gene>,
	organism: Option<Organism>,
	sequence: Option<Sequence>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct Description {
	recommended_name: Option<Name>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct Name {
	full_name: Option<Text>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct Gene {
	gene_name: Option<Text>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Text {
	value: String,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct Organism {
	scientific_name: String,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct Sequence {
	length: u64,
	mol_weight: u64,
}

/// What UniProt knows about one protein. Absent or empty fields are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
	pub protein_id: String,
	pub protein_name: Option<String>,
	pub gene_name: Option<String>,
	pub organism: Option<String>,
	pub sequence_length: Option<u64>,
	pub molecular_weight: Option<u64>,
}

fn or_na<T: Into<Value>>(value: Option<T>) -> Value {
	value.map_or_else(|| Value::from("N/A"), Into::into)
}

impl Annotation {
	/// Pretty-printed JSON with "N/A" for every missing field.
	pub fn summary(&self) -> String {
		let value = json!({
			"protein_id": self.protein_id,
			"protein_name": or_na(self.protein_name.clone()),
			"gene_name": or_na(self.gene_name.clone()),
			"organism": or_na(self.organism.clone()),
			"sequence_length": or_na(self.sequence_length),
			"molecular_weight": or_na(self.molecular_weight),
		});
		serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
	}

	/// Sequence length as a one-bar chart labelled with the protein name.
	pub fn chart(&self) -> BarChartData {
		let name = self.protein_name.as_deref().unwrap_or("N/A");
		let mut label: String = name.chars().take(LABEL_CHARS).collect();
		if name.chars().count() > LABEL_CHARS {
			label.push_str("...");
		}
		BarChartData {
			title: "Protein Sequence Length".into(),
			axis_title: "Amino Acids".into(),
			label,
			value: self.sequence_length.map(|n| n as f64),
		}
	}
}

pub fn request_url(base: &str, encoded_id: &str) -> String {
	format!("{base}/{encoded_id}.json")
}

fn non_empty(text: String) -> Option<String> {
	Some(text).filter(|t| !t.is_empty())
}

pub fn parse(body: &str, protein_id: &str) -> Result<Annotation, FetchError> {
	let entry: Entry = serde_json::from_str(body)?;
	let sequence = entry.sequence.unwrap_or_default();
	Ok(Annotation {
		protein_id: protein_id.to_string(),
		protein_name: entry
			.protein_description
			.and_then(|d| d.recommended_name)
			.and_then(|n| n.full_name)
			.and_then(|t| non_empty(t.value)),
		gene_name: entry
			.genes
			.into_iter()
			.next()
			.and_then(|g| g.gene_name)
			.and_then(|t| non_empty(t.value)),
		organism: entry.organism.and_then(|o| non_empty(o.scientific_name)),
		sequence_length: Some(sequence.length).filter(|n| *n > 0),
		molecular_weight: Some(sequence.mol_weight).filter(|n| *n > 0),
	})
}
