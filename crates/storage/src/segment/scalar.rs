// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use strata_type::{GetType, OrderedF32, OrderedF64, TypeError, Value};

use super::{DictionaryData, DictionarySegment, ValueData, ValueSegment};

/// A Rust type that can live in a column.
///
/// Bridges between the dynamically typed [`Value`] and the typed segment
/// payloads, so that segment and scan code can be written once, generic over
/// `T: Scalar`, and monomorphized per supported column type.
pub trait Scalar: GetType + Clone + Ord + Debug + Send + Sync + 'static {
	fn try_from_value(value: &Value) -> Result<Self, TypeError>;

	fn into_value(self) -> Value;

	fn value_segment(data: &ValueData) -> Option<&ValueSegment<Self>>;

	fn dictionary_segment(data: &DictionaryData) -> Option<&DictionarySegment<Self>>;

	fn wrap_values(segment: ValueSegment<Self>) -> ValueData;

	fn wrap_dictionary(segment: DictionarySegment<Self>) -> DictionaryData;

	/// Bytes owned outside the inline representation.
	fn heap_size(&self) -> usize;
}

macro_rules! impl_scalar {
	($t:ty, $variant:ident) => {
		impl_scalar!($t, $variant, |_| 0);
	};
	($t:ty, $variant:ident, $heap_size:expr) => {
		impl Scalar for $t {
			fn try_from_value(value: &Value) -> Result<Self, TypeError> {
				match value {
					Value::$variant(v) => Ok(v.clone()),
					other => Err(TypeError::Mismatch {
						expected: <$t as GetType>::get_type(),
						actual: other.get_type(),
					}),
				}
			}

			fn into_value(self) -> Value {
				Value::$variant(self)
			}

			fn value_segment(data: &ValueData) -> Option<&ValueSegment<Self>> {
				match data {
					ValueData::$variant(segment) => Some(segment),
					_ => None,
				}
			}

			fn dictionary_segment(data: &DictionaryData) -> Option<&DictionarySegment<Self>> {
				match data {
					DictionaryData::$variant(segment) => Some(segment),
					_ => None,
				}
			}

			fn wrap_values(segment: ValueSegment<Self>) -> ValueData {
				ValueData::$variant(segment)
			}

			fn wrap_dictionary(segment: DictionarySegment<Self>) -> DictionaryData {
				DictionaryData::$variant(segment)
			}

			fn heap_size(&self) -> usize {
				let heap_size: fn(&Self) -> usize = $heap_size;
				heap_size(self)
			}
		}
	};
}

impl_scalar!(i32, Int4);
impl_scalar!(i64, Int8);
impl_scalar!(OrderedF32, Float4);
impl_scalar!(OrderedF64, Float8);
impl_scalar!(String, Utf8, |s| s.len());

/// Binds `$T` to the Rust type backing a column [`Type`](strata_type::Type) and
/// evaluates `$body` with it.
#[macro_export]
macro_rules! with_scalar_type {
	($ty:expr, $T:ident => $body:expr) => {
		match $ty {
			::strata_type::Type::Int4 => {
				type $T = i32;
				$body
			}
			::strata_type::Type::Int8 => {
				type $T = i64;
				$body
			}
			::strata_type::Type::Float4 => {
				type $T = ::strata_type::OrderedF32;
				$body
			}
			::strata_type::Type::Float8 => {
				type $T = ::strata_type::OrderedF64;
				$body
			}
			::strata_type::Type::Utf8 => {
				type $T = ::std::string::String;
				$body
			}
		}
	};
}
