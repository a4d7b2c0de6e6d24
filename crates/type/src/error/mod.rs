// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Type;

mod diagnostic;
pub mod internal;

pub use internal::{internal, internal_with_context};

/// A structured description of a failure, carrying a stable code that tests and
/// callers can match on plus optional human guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn into_diagnostic(self) -> Diagnostic {
		*self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let diagnostic = &self.0;
		write!(f, "[{}] {}", diagnostic.code, diagnostic.message)?;
		if let Some(label) = &diagnostic.label {
			write!(f, "\n  label: {}", label)?;
		}
		if let Some(help) = &diagnostic.help {
			write!(f, "\n  help: {}", help)?;
		}
		for note in &diagnostic.notes {
			write!(f, "\n  note: {}", note)?;
		}
		Ok(())
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

/// Errors raised when a value does not fit the type a caller expects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("expected a value of type {expected}, got {actual}")]
	Mismatch {
		expected: Type,
		actual: Type,
	},

	#[error("NaN is not a valid {value_type} value")]
	NotANumber {
		value_type: Type,
	},
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}
