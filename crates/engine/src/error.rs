// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{ChunkId, ColumnId, Diagnostic, Error, IntoDiagnostic, Type};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
	#[error("cannot compare column {column_id} of type {column_type} with a {literal_type} literal")]
	LiteralType {
		column_id: ColumnId,
		column_type: Type,
		literal_type: Type,
	},

	#[error("chunk {chunk_id} does not refer to the same table as the chunks before it")]
	MixedReferences {
		chunk_id: ChunkId,
	},
}

impl IntoDiagnostic for ScanError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ScanError::LiteralType {
				column_type,
				..
			} => Diagnostic {
				code: "SCAN_001".to_string(),
				message,
				label: Some("literal type does not match column type".to_string()),
				help: Some(format!("use a {} literal", column_type)),
				notes: vec![],
			},

			ScanError::MixedReferences {
				..
			} => Diagnostic {
				code: "SCAN_002".to_string(),
				message,
				label: Some("input mixes row sources".to_string()),
				help: Some("every chunk of a scan input must be stored data or refer to one table".to_string()),
				notes: vec![],
			},
		}
	}
}

impl From<ScanError> for Error {
	fn from(err: ScanError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}
