// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem::size_of;

use strata_type::{ChunkOffset, Result, Value};

use super::Scalar;
use crate::StorageError;

/// Uncompressed, append-only column data.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSegment<T> {
	values: Vec<T>,
}

impl<T> Default for ValueSegment<T> {
	fn default() -> Self {
		Self {
			values: Vec::new(),
		}
	}
}

impl<T: Scalar> ValueSegment<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Type-checks `value` against `T` and pushes it.
	pub fn append(&mut self, value: &Value) -> Result<()> {
		self.values.push(T::try_from_value(value)?);
		Ok(())
	}

	pub fn push(&mut self, value: T) {
		self.values.push(value);
	}

	pub fn values(&self) -> &[T] {
		&self.values
	}

	pub fn get(&self, offset: ChunkOffset) -> Option<&T> {
		self.values.get(offset.index())
	}

	pub fn value(&self, offset: ChunkOffset) -> Result<Value> {
		match self.get(offset) {
			Some(v) => Ok(v.clone().into_value()),
			None => Err(StorageError::OffsetOutOfRange {
				offset,
				size: self.size(),
			}
			.into()),
		}
	}

	pub fn size(&self) -> usize {
		self.values.len()
	}

	pub fn memory_usage(&self) -> usize {
		self.values.len() * size_of::<T>() + self.values.iter().map(|v| v.heap_size()).sum::<usize>()
	}
}

impl<T: Scalar> FromIterator<T> for ValueSegment<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_append_checks_type() {
		let mut segment = ValueSegment::<i32>::new();
		segment.append(&Value::Int4(4)).unwrap();
		segment.append(&Value::Int4(6)).unwrap();

		let err = segment.append(&Value::utf8("Hi")).unwrap_err();
		assert_eq!(err.code(), "TYPE_001");
		assert_eq!(segment.size(), 2);
		assert_eq!(segment.values(), &[4, 6]);
	}

	#[test]
	fn test_value_by_offset() {
		let segment: ValueSegment<String> = ["Bill", "Steve"].into_iter().map(String::from).collect();

		assert_eq!(segment.value(ChunkOffset(1)).unwrap(), Value::utf8("Steve"));
		assert_eq!(segment.value(ChunkOffset(2)).unwrap_err().code(), "STORAGE_003");
	}

	#[test]
	fn test_memory_usage() {
		let ints: ValueSegment<i64> = (0..4).collect();
		assert_eq!(ints.memory_usage(), 32);

		let strings: ValueSegment<String> = ["ab", "cde"].into_iter().map(String::from).collect();
		assert_eq!(strings.memory_usage(), 2 * size_of::<String>() + 5);
	}
}
