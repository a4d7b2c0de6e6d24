// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic, TypeError};

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::Mismatch {
				expected,
				actual,
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message: format!("expected a value of type {}, got {}", expected, actual),
				label: Some(format!("{} value where {} is required", actual, expected)),
				help: Some(format!("provide a {} value or convert the value before passing it", expected)),
				notes: vec!["values are never converted implicitly between types".to_string()],
			},

			TypeError::NotANumber {
				value_type,
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				message: format!("NaN is not a valid {} value", value_type),
				label: Some("NaN cannot be ordered".to_string()),
				help: Some("filter out NaN before storing floating point values".to_string()),
				notes: vec![],
			},
		}
	}
}
