// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{ChunkId, ChunkOffset, ColumnId, Diagnostic, Error, IntoDiagnostic};

use crate::segment::SegmentKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
	#[error("expected {expected} values, got {actual}")]
	ArgumentCount {
		expected: usize,
		actual: usize,
	},

	#[error("column `{name}` already exists")]
	DuplicateColumn {
		name: String,
	},

	#[error("cannot add column `{name}` to a table holding {row_count} rows")]
	ColumnAfterRows {
		name: String,
		row_count: u64,
	},

	#[error("unknown column `{name}`")]
	UnknownColumn {
		name: String,
	},

	#[error("chunk has {actual} columns but the table has {expected}")]
	ChunkColumnCount {
		expected: usize,
		actual: usize,
	},

	#[error("cannot add column `{name}`, a table holds at most {limit} columns")]
	TooManyColumns {
		name: String,
		limit: u16,
	},

	#[error("chunk {chunk_id} out of range, table has {chunk_count} chunks")]
	ChunkOutOfRange {
		chunk_id: ChunkId,
		chunk_count: u32,
	},

	#[error("column {column_id} out of range, there are {column_count} columns")]
	ColumnOutOfRange {
		column_id: ColumnId,
		column_count: u16,
	},

	#[error("offset {offset} out of range, segment holds {size} rows")]
	OffsetOutOfRange {
		offset: ChunkOffset,
		size: usize,
	},

	#[error("{kind} segments are immutable")]
	ImmutableSegment {
		kind: SegmentKind,
	},
}

impl IntoDiagnostic for StorageError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			StorageError::ArgumentCount {
				expected,
				..
			} => Diagnostic {
				code: "SCHEMA_001".to_string(),
				message,
				label: Some("wrong number of values for row".to_string()),
				help: Some(format!("provide exactly one value per column ({} columns)", expected)),
				notes: vec![],
			},

			StorageError::DuplicateColumn {
				..
			} => Diagnostic {
				code: "SCHEMA_002".to_string(),
				message,
				label: Some("duplicate column name".to_string()),
				help: Some("choose a different column name".to_string()),
				notes: vec![],
			},

			StorageError::ColumnAfterRows {
				..
			} => Diagnostic {
				code: "SCHEMA_003".to_string(),
				message,
				label: Some("schema is fixed once rows exist".to_string()),
				help: Some("define every column before appending the first row".to_string()),
				notes: vec![],
			},

			StorageError::UnknownColumn {
				..
			} => Diagnostic {
				code: "SCHEMA_004".to_string(),
				message,
				label: Some("no column with this name".to_string()),
				help: None,
				notes: vec![],
			},

			StorageError::ChunkColumnCount {
				..
			} => Diagnostic {
				code: "SCHEMA_005".to_string(),
				message,
				label: Some("chunk does not match table schema".to_string()),
				help: None,
				notes: vec![],
			},

			StorageError::TooManyColumns {
				..
			} => Diagnostic {
				code: "SCHEMA_006".to_string(),
				message,
				label: Some("column limit reached".to_string()),
				help: Some("split the data across several tables".to_string()),
				notes: vec![],
			},

			StorageError::ChunkOutOfRange {
				..
			} => Diagnostic {
				code: "STORAGE_001".to_string(),
				message,
				label: Some("chunk id out of range".to_string()),
				help: None,
				notes: vec![],
			},

			StorageError::ColumnOutOfRange {
				..
			} => Diagnostic {
				code: "STORAGE_002".to_string(),
				message,
				label: Some("column id out of range".to_string()),
				help: None,
				notes: vec![],
			},

			StorageError::OffsetOutOfRange {
				..
			} => Diagnostic {
				code: "STORAGE_003".to_string(),
				message,
				label: Some("row offset out of range".to_string()),
				help: None,
				notes: vec![],
			},

			StorageError::ImmutableSegment {
				kind,
			} => Diagnostic {
				code: "STORAGE_004".to_string(),
				message,
				label: Some(format!("cannot append to a {} segment", kind)),
				help: Some("append to the table, which routes rows into an uncompressed chunk".to_string()),
				notes: vec![],
			},
		}
	}
}

impl From<StorageError> for Error {
	fn from(err: StorageError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes() {
		let cases = [
			(
				StorageError::ArgumentCount {
					expected: 2,
					actual: 1,
				},
				"SCHEMA_001",
			),
			(
				StorageError::DuplicateColumn {
					name: "a".to_string(),
				},
				"SCHEMA_002",
			),
			(
				StorageError::TooManyColumns {
					name: "c".to_string(),
					limit: u16::MAX,
				},
				"SCHEMA_006",
			),
			(
				StorageError::ChunkOutOfRange {
					chunk_id: ChunkId(4),
					chunk_count: 1,
				},
				"STORAGE_001",
			),
			(
				StorageError::ImmutableSegment {
					kind: SegmentKind::Dictionary,
				},
				"STORAGE_004",
			),
		];

		for (err, code) in cases {
			assert_eq!(Error::from(err).code(), code);
		}
	}

	#[test]
	fn test_message_is_carried() {
		let err = Error::from(StorageError::UnknownColumn {
			name: "price".to_string(),
		});
		assert_eq!(err.diagnostic().message, "unknown column `price`");
	}
}
