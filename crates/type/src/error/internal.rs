// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// Builds the diagnostic for a broken engine invariant, tagging it with the
/// source location that detected it.
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();
	let error_id = format!("ERR-{}:{}", file.rsplit('/').next().unwrap_or(file).trim_end_matches(".rs"), line);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error [{}]: {}", error_id, reason),
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Location: {}:{}:{}\nFunction: {}\nModule: {}\nVersion: {}",
			file,
			line,
			column,
			function,
			module_path,
			env!("CARGO_PKG_VERSION"),
		)),
		notes: vec![
			format!("Error occurred in function: {}", function),
			"This error indicates a bug in the storage engine, not bad input.".to_string(),
		],
	}
}

pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown", "unknown")
}

#[macro_export]
macro_rules! internal_error {
    ($reason:expr) => {
        $crate::error::internal_with_context(
            $reason,
            file!(),
            line!(),
            column!(),
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                &name[..name.len() - 3]
            },
            module_path!()
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::internal_with_context(
            format!($fmt, $($arg)*),
            file!(),
            line!(),
            column!(),
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                &name[..name.len() - 3]
            },
            module_path!()
        )
    };
}

#[macro_export]
macro_rules! internal_err {
    ($reason:expr) => {
        Err($crate::error::Error::from($crate::internal_error!($reason)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::error::Error::from($crate::internal_error!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! return_internal_error {
    ($reason:expr) => {
        return Err($crate::error::Error::from($crate::internal_error!($reason)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::from($crate::internal_error!($fmt, $($arg)*)))
    };
}
