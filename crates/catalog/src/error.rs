// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("table `{name}` already exists")]
	AlreadyExists {
		name: String,
	},

	#[error("table `{name}` not found")]
	NotFound {
		name: String,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CatalogError::AlreadyExists {
				name,
			} => Diagnostic {
				code: "CATALOG_001".to_string(),
				message,
				label: Some(format!("`{}` is already registered", name)),
				help: Some("remove the existing table first or choose another name".to_string()),
				notes: vec![],
			},

			CatalogError::NotFound {
				name,
			} => Diagnostic {
				code: "CATALOG_002".to_string(),
				message,
				label: Some(format!("no table registered as `{}`", name)),
				help: None,
				notes: vec![],
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}
