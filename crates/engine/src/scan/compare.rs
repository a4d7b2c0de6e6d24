// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScanType {
	Equals,
	NotEquals,
	GreaterThan,
	GreaterThanEquals,
	LessThan,
	LessThanEquals,
}

impl Display for ScanType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ScanType::Equals => f.write_str("="),
			ScanType::NotEquals => f.write_str("!="),
			ScanType::GreaterThan => f.write_str(">"),
			ScanType::GreaterThanEquals => f.write_str(">="),
			ScanType::LessThan => f.write_str("<"),
			ScanType::LessThanEquals => f.write_str("<="),
		}
	}
}

/// A comparison fixed at compile time, so scan loops are monomorphized per
/// operator instead of branching per row.
pub trait Compare {
	const SCAN_TYPE: ScanType;

	fn compare<T: PartialOrd + ?Sized>(left: &T, right: &T) -> bool;
}

macro_rules! comparator {
	($name:ident, $scan_type:ident, $op:tt) => {
		#[derive(Debug, Copy, Clone, Default)]
		pub struct $name;

		impl Compare for $name {
			const SCAN_TYPE: ScanType = ScanType::$scan_type;

			#[inline]
			fn compare<T: PartialOrd + ?Sized>(left: &T, right: &T) -> bool {
				left $op right
			}
		}
	};
}

comparator!(Equal, Equals, ==);
comparator!(NotEqual, NotEquals, !=);
comparator!(GreaterThan, GreaterThan, >);
comparator!(GreaterThanEqual, GreaterThanEquals, >=);
comparator!(LessThan, LessThan, <);
comparator!(LessThanEqual, LessThanEquals, <=);

/// Binds `$C` to the comparator for `$scan_type` and evaluates `$body` with it.
macro_rules! with_comparator {
	($scan_type:expr, $C:ident => $body:expr) => {
		match $scan_type {
			$crate::scan::ScanType::Equals => {
				type $C = $crate::scan::compare::Equal;
				$body
			}
			$crate::scan::ScanType::NotEquals => {
				type $C = $crate::scan::compare::NotEqual;
				$body
			}
			$crate::scan::ScanType::GreaterThan => {
				type $C = $crate::scan::compare::GreaterThan;
				$body
			}
			$crate::scan::ScanType::GreaterThanEquals => {
				type $C = $crate::scan::compare::GreaterThanEqual;
				$body
			}
			$crate::scan::ScanType::LessThan => {
				type $C = $crate::scan::compare::LessThan;
				$body
			}
			$crate::scan::ScanType::LessThanEquals => {
				type $C = $crate::scan::compare::LessThanEqual;
				$body
			}
		}
	};
}

pub(crate) use with_comparator;
