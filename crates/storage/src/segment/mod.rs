// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! One column's worth of data within one chunk.
//!
//! A segment is one of three physical layouts: an append-only [`ValueSegment`],
//! an immutable [`DictionarySegment`], or a [`ReferenceSegment`] pointing into
//! another table. Generic readers go through [`Segment::value`]; hot paths
//! match on the variant and project the typed payload with
//! [`Segment::as_value`] / [`Segment::as_dictionary`].

use std::fmt::{self, Display, Formatter};

use strata_type::{ChunkOffset, OrderedF32, OrderedF64, Result, Type, Value};

mod dictionary;
mod reference;
mod scalar;
mod value;

pub use dictionary::DictionarySegment;
pub use reference::ReferenceSegment;
pub use scalar::Scalar;
pub use value::ValueSegment;

use crate::StorageError;

#[derive(Debug, Clone, PartialEq)]
pub enum ValueData {
	Int4(ValueSegment<i32>),
	Int8(ValueSegment<i64>),
	Float4(ValueSegment<OrderedF32>),
	Float8(ValueSegment<OrderedF64>),
	Utf8(ValueSegment<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DictionaryData {
	Int4(DictionarySegment<i32>),
	Int8(DictionarySegment<i64>),
	Float4(DictionarySegment<OrderedF32>),
	Float8(DictionarySegment<OrderedF64>),
	Utf8(DictionarySegment<String>),
}

macro_rules! dispatch {
	($data:expr, $enum:ident, $segment:ident => $body:expr) => {
		match $data {
			$enum::Int4($segment) => $body,
			$enum::Int8($segment) => $body,
			$enum::Float4($segment) => $body,
			$enum::Float8($segment) => $body,
			$enum::Utf8($segment) => $body,
		}
	};
}

impl ValueData {
	pub fn new(ty: Type) -> Self {
		crate::with_scalar_type!(ty, T => T::wrap_values(ValueSegment::<T>::new()))
	}

	pub fn get_type(&self) -> Type {
		match self {
			ValueData::Int4(_) => Type::Int4,
			ValueData::Int8(_) => Type::Int8,
			ValueData::Float4(_) => Type::Float4,
			ValueData::Float8(_) => Type::Float8,
			ValueData::Utf8(_) => Type::Utf8,
		}
	}

	pub fn append(&mut self, value: &Value) -> Result<()> {
		dispatch!(self, ValueData, segment => segment.append(value))
	}

	pub fn value(&self, offset: ChunkOffset) -> Result<Value> {
		dispatch!(self, ValueData, segment => segment.value(offset))
	}

	pub fn size(&self) -> usize {
		dispatch!(self, ValueData, segment => segment.size())
	}

	pub fn compress(&self) -> Result<DictionaryData> {
		Ok(match self {
			ValueData::Int4(segment) => DictionaryData::Int4(DictionarySegment::from_segment(segment)?),
			ValueData::Int8(segment) => DictionaryData::Int8(DictionarySegment::from_segment(segment)?),
			ValueData::Float4(segment) => DictionaryData::Float4(DictionarySegment::from_segment(segment)?),
			ValueData::Float8(segment) => DictionaryData::Float8(DictionarySegment::from_segment(segment)?),
			ValueData::Utf8(segment) => DictionaryData::Utf8(DictionarySegment::from_segment(segment)?),
		})
	}

	pub fn memory_usage(&self) -> usize {
		dispatch!(self, ValueData, segment => segment.memory_usage())
	}
}

impl DictionaryData {
	pub fn get_type(&self) -> Type {
		match self {
			DictionaryData::Int4(_) => Type::Int4,
			DictionaryData::Int8(_) => Type::Int8,
			DictionaryData::Float4(_) => Type::Float4,
			DictionaryData::Float8(_) => Type::Float8,
			DictionaryData::Utf8(_) => Type::Utf8,
		}
	}

	pub fn value(&self, offset: ChunkOffset) -> Result<Value> {
		dispatch!(self, DictionaryData, segment => segment.value(offset))
	}

	pub fn size(&self) -> usize {
		dispatch!(self, DictionaryData, segment => segment.size())
	}

	pub fn unique_values_count(&self) -> usize {
		dispatch!(self, DictionaryData, segment => segment.unique_values_count())
	}

	pub fn memory_usage(&self) -> usize {
		dispatch!(self, DictionaryData, segment => segment.memory_usage())
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
	Value,
	Dictionary,
	Reference,
}

impl Display for SegmentKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			SegmentKind::Value => f.write_str("value"),
			SegmentKind::Dictionary => f.write_str("dictionary"),
			SegmentKind::Reference => f.write_str("reference"),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
	Value(ValueData),
	Dictionary(DictionaryData),
	Reference(ReferenceSegment),
}

impl Segment {
	/// An empty, appendable segment for a column of type `ty`.
	pub fn value_segment(ty: Type) -> Self {
		Segment::Value(ValueData::new(ty))
	}

	pub fn kind(&self) -> SegmentKind {
		match self {
			Segment::Value(_) => SegmentKind::Value,
			Segment::Dictionary(_) => SegmentKind::Dictionary,
			Segment::Reference(_) => SegmentKind::Reference,
		}
	}

	pub fn get_type(&self) -> Result<Type> {
		match self {
			Segment::Value(data) => Ok(data.get_type()),
			Segment::Dictionary(data) => Ok(data.get_type()),
			Segment::Reference(segment) => segment.referenced_type(),
		}
	}

	/// Logical value at `offset`, whatever the physical layout.
	pub fn value(&self, offset: ChunkOffset) -> Result<Value> {
		match self {
			Segment::Value(data) => data.value(offset),
			Segment::Dictionary(data) => data.value(offset),
			Segment::Reference(segment) => segment.value(offset),
		}
	}

	pub fn size(&self) -> usize {
		match self {
			Segment::Value(data) => data.size(),
			Segment::Dictionary(data) => data.size(),
			Segment::Reference(segment) => segment.size(),
		}
	}

	/// Fails exactly when [`Segment::append`] would, without mutating anything.
	pub fn check_append(&self, value: &Value) -> Result<()> {
		match self {
			Segment::Value(data) => Ok(value.expect_type(data.get_type())?),
			Segment::Dictionary(_) | Segment::Reference(_) => Err(StorageError::ImmutableSegment {
				kind: self.kind(),
			}
			.into()),
		}
	}

	pub fn append(&mut self, value: &Value) -> Result<()> {
		match self {
			Segment::Value(data) => data.append(value),
			Segment::Dictionary(_) | Segment::Reference(_) => Err(StorageError::ImmutableSegment {
				kind: self.kind(),
			}
			.into()),
		}
	}

	pub fn memory_usage(&self) -> usize {
		match self {
			Segment::Value(data) => data.memory_usage(),
			Segment::Dictionary(data) => data.memory_usage(),
			Segment::Reference(segment) => segment.memory_usage(),
		}
	}

	pub fn as_value<T: Scalar>(&self) -> Option<&ValueSegment<T>> {
		match self {
			Segment::Value(data) => T::value_segment(data),
			_ => None,
		}
	}

	pub fn as_dictionary<T: Scalar>(&self) -> Option<&DictionarySegment<T>> {
		match self {
			Segment::Dictionary(data) => T::dictionary_segment(data),
			_ => None,
		}
	}

	pub fn as_reference(&self) -> Option<&ReferenceSegment> {
		match self {
			Segment::Reference(segment) => Some(segment),
			_ => None,
		}
	}
}

impl<T: Scalar> From<ValueSegment<T>> for Segment {
	fn from(segment: ValueSegment<T>) -> Self {
		Segment::Value(T::wrap_values(segment))
	}
}

impl<T: Scalar> From<DictionarySegment<T>> for Segment {
	fn from(segment: DictionarySegment<T>) -> Self {
		Segment::Dictionary(T::wrap_dictionary(segment))
	}
}

impl From<ReferenceSegment> for Segment {
	fn from(segment: ReferenceSegment) -> Self {
		Segment::Reference(segment)
	}
}
