// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::TypeError;

mod ordered_f32;
mod ordered_f64;
mod r#type;

pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use r#type::{GetType, Type};

/// A single cell value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
}

impl Value {
	pub fn int4(v: i32) -> Self {
		Value::Int4(v)
	}

	pub fn int8(v: i64) -> Self {
		Value::Int8(v)
	}

	/// Fails for NaN.
	pub fn float4(v: f32) -> Result<Self, TypeError> {
		OrderedF32::try_from(v).map(Value::Float4)
	}

	/// Fails for NaN.
	pub fn float8(v: f64) -> Result<Self, TypeError> {
		OrderedF64::try_from(v).map(Value::Float8)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
		}
	}

	/// Fails with a type mismatch unless this value is of `expected` type.
	pub fn expect_type(&self, expected: Type) -> Result<(), TypeError> {
		let actual = self.get_type();
		if actual != expected {
			return Err(TypeError::Mismatch {
				expected,
				actual,
			});
		}
		Ok(())
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Utf8(v) => Display::fmt(v, f),
		}
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<OrderedF32> for Value {
	fn from(v: OrderedF32) -> Self {
		Value::Float4(v)
	}
}

impl From<OrderedF64> for Value {
	fn from(v: OrderedF64) -> Self {
		Value::Float8(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_type() {
		assert_eq!(Value::int4(1).get_type(), Type::Int4);
		assert_eq!(Value::int8(1).get_type(), Type::Int8);
		assert_eq!(Value::float4(1.5).unwrap().get_type(), Type::Float4);
		assert_eq!(Value::float8(1.5).unwrap().get_type(), Type::Float8);
		assert_eq!(Value::utf8("a").get_type(), Type::Utf8);
	}

	#[test]
	fn test_float_rejects_nan() {
		assert_eq!(
			Value::float8(f64::NAN),
			Err(TypeError::NotANumber {
				value_type: Type::Float8
			})
		);
		assert!(Value::float4(f32::NAN).is_err());
	}

	#[test]
	fn test_expect_type() {
		assert!(Value::int4(7).expect_type(Type::Int4).is_ok());
		assert_eq!(
			Value::utf8("7").expect_type(Type::Int4),
			Err(TypeError::Mismatch {
				expected: Type::Int4,
				actual: Type::Utf8,
			})
		);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::int4(-3).to_string(), "-3");
		assert_eq!(Value::float8(2.5).unwrap().to_string(), "2.5");
		assert_eq!(Value::from("Alice").to_string(), "Alice");
	}
}
