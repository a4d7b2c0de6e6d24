// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeSet, mem::size_of};

use strata_type::{ChunkOffset, INVALID_VALUE_ID, Result, Value, ValueId, internal_err};

use super::{Scalar, ValueSegment};
use crate::{AttributeVector, AttributeVectorWidth, StorageError};

/// Immutable dictionary-encoded column data.
///
/// `dictionary` holds every distinct value exactly once in ascending order; the
/// attribute vector maps each row to the position of its value in the
/// dictionary. Because positions follow value order, comparing codes is
/// equivalent to comparing values.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionarySegment<T> {
	dictionary: Vec<T>,
	attribute_vector: AttributeVector,
}

impl<T: Scalar> DictionarySegment<T> {
	pub fn from_segment(segment: &ValueSegment<T>) -> Result<Self> {
		Self::from_values(segment.values())
	}

	pub fn from_values(values: &[T]) -> Result<Self> {
		let distinct: BTreeSet<&T> = values.iter().collect();
		let width = AttributeVectorWidth::for_distinct_count(distinct.len())?;
		let dictionary: Vec<T> = distinct.into_iter().cloned().collect();

		let mut attribute_vector = AttributeVector::new(width, values.len());
		for (offset, value) in values.iter().enumerate() {
			let Ok(position) = dictionary.binary_search(value) else {
				return internal_err!("value {:?} missing from freshly built dictionary", value);
			};
			attribute_vector.set(ChunkOffset(offset as u32), ValueId(position as u32))?;
		}

		Ok(Self {
			dictionary,
			attribute_vector,
		})
	}

	/// Value at `offset`, decoded through the dictionary.
	pub fn get(&self, offset: ChunkOffset) -> Option<&T> {
		self.attribute_vector.get(offset).and_then(|value_id| self.value_by_value_id(value_id))
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

	pub fn dictionary(&self) -> &[T] {
		&self.dictionary
	}

	pub fn attribute_vector(&self) -> &AttributeVector {
		&self.attribute_vector
	}

	pub fn value_by_value_id(&self, value_id: ValueId) -> Option<&T> {
		self.dictionary.get(value_id.index())
	}

	/// First value id whose value is `>= value`, or [`INVALID_VALUE_ID`] if every
	/// entry is smaller.
	pub fn lower_bound(&self, value: &T) -> ValueId {
		let position = self.dictionary.partition_point(|entry| entry < value);
		self.to_value_id(position)
	}

	/// First value id whose value is `> value`, or [`INVALID_VALUE_ID`] if every
	/// entry is smaller or equal.
	pub fn upper_bound(&self, value: &T) -> ValueId {
		let position = self.dictionary.partition_point(|entry| entry <= value);
		self.to_value_id(position)
	}

	pub fn lower_bound_value(&self, value: &Value) -> Result<ValueId> {
		Ok(self.lower_bound(&T::try_from_value(value)?))
	}

	pub fn upper_bound_value(&self, value: &Value) -> Result<ValueId> {
		Ok(self.upper_bound(&T::try_from_value(value)?))
	}

	fn to_value_id(&self, position: usize) -> ValueId {
		if position == self.dictionary.len() {
			INVALID_VALUE_ID
		} else {
			ValueId(position as u32)
		}
	}

	pub fn unique_values_count(&self) -> usize {
		self.dictionary.len()
	}

	pub fn size(&self) -> usize {
		self.attribute_vector.size()
	}

	pub fn memory_usage(&self) -> usize {
		self.dictionary.len() * size_of::<T>()
			+ self.dictionary.iter().map(|v| v.heap_size()).sum::<usize>()
			+ self.attribute_vector.memory_usage()
	}
}

#[cfg(test)]
mod tests {
	use strata_type::OrderedF64;

	use super::*;

	fn names() -> ValueSegment<String> {
		["Bill", "Steve", "Alexander", "Steve", "Hasso", "Bill"].into_iter().map(String::from).collect()
	}

	#[test]
	fn test_compress_segment_string() {
		let segment = names();
		let dict = DictionarySegment::from_segment(&segment).unwrap();

		assert_eq!(dict.size(), 6);
		assert_eq!(dict.unique_values_count(), 4);
		assert_eq!(dict.dictionary(), &["Alexander", "Bill", "Hasso", "Steve"]);
		assert_eq!(dict.get(ChunkOffset(0)).unwrap(), "Bill");
		assert_eq!(dict.get(ChunkOffset(2)).unwrap(), "Alexander");
	}

	#[test]
	fn test_round_trip() {
		let segment = names();
		let dict = DictionarySegment::from_segment(&segment).unwrap();

		for offset in 0..segment.size() as u32 {
			assert_eq!(dict.value(ChunkOffset(offset)).unwrap(), segment.value(ChunkOffset(offset)).unwrap());
		}

		let floats: ValueSegment<OrderedF64> =
			[2.5, -1.0, 2.5, 0.0].into_iter().map(|f| OrderedF64::try_from(f).unwrap()).collect();
		let dict = DictionarySegment::from_segment(&floats).unwrap();
		let decoded: Vec<f64> = (0..4).map(|o| f64::from(*dict.get(ChunkOffset(o)).unwrap())).collect();
		assert_eq!(decoded, vec![2.5, -1.0, 2.5, 0.0]);
	}

	#[test]
	fn test_dictionary_strictly_ascending() {
		let segment: ValueSegment<i32> = [9, 3, 3, 7, -2, 9, 0].into_iter().collect();
		let dict = DictionarySegment::from_segment(&segment).unwrap();

		assert!(dict.dictionary().windows(2).all(|w| w[0] < w[1]));
		assert_eq!(dict.dictionary(), &[-2, 0, 3, 7, 9]);
	}

	#[test]
	fn test_lower_upper_bound() {
		let segment: ValueSegment<i32> = (0..=10).step_by(2).collect();
		let dict = DictionarySegment::from_segment(&segment).unwrap();

		assert_eq!(dict.lower_bound(&4), ValueId(2));
		assert_eq!(dict.upper_bound(&4), ValueId(3));

		assert_eq!(dict.lower_bound(&5), ValueId(3));
		assert_eq!(dict.upper_bound(&5), ValueId(3));

		assert_eq!(dict.lower_bound(&-1), ValueId(0));
		assert_eq!(dict.upper_bound(&10), INVALID_VALUE_ID);

		assert_eq!(dict.lower_bound(&15), INVALID_VALUE_ID);
		assert_eq!(dict.upper_bound(&15), INVALID_VALUE_ID);
	}

	#[test]
	fn test_bounds_match_linear_search() {
		let segment: ValueSegment<i32> = [1, 5, 5, 9, 13, 13, 20].into_iter().collect();
		let dict = DictionarySegment::from_segment(&segment).unwrap();

		for v in -2..25 {
			let lower = dict.dictionary().iter().position(|e| *e >= v);
			let upper = dict.dictionary().iter().position(|e| *e > v);
			assert_eq!(dict.lower_bound(&v), lower.map_or(INVALID_VALUE_ID, |p| ValueId(p as u32)));
			assert_eq!(dict.upper_bound(&v), upper.map_or(INVALID_VALUE_ID, |p| ValueId(p as u32)));
		}
	}

	#[test]
	fn test_bound_by_value_checks_type() {
		let segment: ValueSegment<i32> = [1, 2].into_iter().collect();
		let dict = DictionarySegment::from_segment(&segment).unwrap();

		assert_eq!(dict.lower_bound_value(&Value::Int4(2)).unwrap(), ValueId(1));
		assert_eq!(dict.upper_bound_value(&Value::utf8("2")).unwrap_err().code(), "TYPE_001");
	}

	#[test]
	fn test_width_boundaries() {
		for (distinct, bytes) in [(254u32, 1u8), (255, 2), (65534, 2), (65535, 4)] {
			let segment: ValueSegment<i32> = (0..distinct as i32).collect();
			let dict = DictionarySegment::from_segment(&segment).unwrap();
			assert_eq!(dict.attribute_vector().width().bytes(), bytes, "{} distinct values", distinct);
		}
	}

	#[test]
	fn test_width_follows_distinct_not_rows() {
		let segment: ValueSegment<i64> = (0..1000).map(|i| i % 3).collect();
		let dict = DictionarySegment::from_segment(&segment).unwrap();
		assert_eq!(dict.attribute_vector().width(), AttributeVectorWidth::U8);
		assert_eq!(dict.size(), 1000);
	}

	#[test]
	fn test_empty() {
		let dict = DictionarySegment::from_segment(&ValueSegment::<i32>::new()).unwrap();
		assert_eq!(dict.size(), 0);
		assert_eq!(dict.lower_bound(&0), INVALID_VALUE_ID);
	}
}
