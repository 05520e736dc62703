use thiserror::Error;

/// A graph the layout or renderer cannot work with.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
	#[error("edge references unknown node `{id}`")]
	UnknownNode { id: String },

	#[error("node id `{id}` appears more than once")]
	DuplicateNode { id: String },

	#[error("graph must have exactly one fixed node, found {count}")]
	FocalCount { count: usize },
}
