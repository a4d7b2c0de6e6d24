// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use strata_type::{ColumnId, Result, Value};

use crate::{Segment, StorageError};

/// A horizontal partition of a table holding one segment per column.
///
/// Segments are shared between chunk snapshots; appending copies a segment
/// only when another snapshot still refers to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
	segments: Vec<Arc<Segment>>,
}

impl Chunk {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_segment(&mut self, segment: impl Into<Arc<Segment>>) {
		self.segments.push(segment.into());
	}

	/// Appends one row. Either every segment receives its value or none does.
	pub fn append(&mut self, values: &[Value]) -> Result<()> {
		if values.len() != self.segments.len() {
			return Err(StorageError::ArgumentCount {
				expected: self.segments.len(),
				actual: values.len(),
			}
			.into());
		}

		for (segment, value) in self.segments.iter().zip(values) {
			segment.check_append(value)?;
		}

		for (segment, value) in self.segments.iter_mut().zip(values) {
			Arc::make_mut(segment).append(value)?;
		}
		Ok(())
	}

	pub fn get_segment(&self, column_id: ColumnId) -> Result<&Arc<Segment>> {
		match self.segments.get(column_id.index()) {
			Some(segment) => Ok(segment),
			None => Err(StorageError::ColumnOutOfRange {
				column_id,
				column_count: self.column_count(),
			}
			.into()),
		}
	}

	pub fn segments(&self) -> &[Arc<Segment>] {
		&self.segments
	}

	/// Saturates at `u16::MAX`.
	pub fn column_count(&self) -> u16 {
		u16::try_from(self.segments.len()).unwrap_or(u16::MAX)
	}

	/// Number of rows, taken from the first segment.
	pub fn size(&self) -> u32 {
		self.segments.first().map_or(0, |segment| segment.size() as u32)
	}

	pub fn is_empty(&self) -> bool {
		self.size() == 0
	}

	pub fn memory_usage(&self) -> usize {
		self.segments.iter().map(|segment| segment.memory_usage()).sum()
	}
}

#[cfg(test)]
mod tests {
	use strata_type::{ChunkOffset, Type};

	use super::*;

	fn chunk() -> Chunk {
		let mut chunk = Chunk::new();
		chunk.add_segment(Segment::value_segment(Type::Int4));
		chunk.add_segment(Segment::value_segment(Type::Utf8));
		chunk
	}

	#[test]
	fn test_add_segment_append_value() {
		let mut chunk = chunk();
		chunk.append(&[Value::Int4(4), Value::utf8("Hello,")]).unwrap();
		chunk.append(&[Value::Int4(6), Value::utf8("world")]).unwrap();
		chunk.append(&[Value::Int4(3), Value::utf8("!")]).unwrap();

		assert_eq!(chunk.size(), 3);
		assert_eq!(chunk.column_count(), 2);
		assert_eq!(chunk.get_segment(ColumnId(1)).unwrap().value(ChunkOffset(2)).unwrap(), Value::utf8("!"));
	}

	#[test]
	fn test_append_wrong_argument_count() {
		let mut chunk = chunk();
		let err = chunk.append(&[Value::Int4(4)]).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_001");
	}

	#[test]
	fn test_append_is_all_or_nothing() {
		let mut chunk = chunk();
		let err = chunk.append(&[Value::Int4(4), Value::Int4(5)]).unwrap_err();

		assert_eq!(err.code(), "TYPE_001");
		assert_eq!(chunk.get_segment(ColumnId(0)).unwrap().size(), 0);
		assert_eq!(chunk.size(), 0);
	}

	#[test]
	fn test_retrieve_segment() {
		let mut chunk = chunk();
		chunk.append(&[Value::Int4(4), Value::utf8("Hello,")]).unwrap();

		let segment = chunk.get_segment(ColumnId(0)).unwrap();
		assert_eq!(segment.size(), 1);
		assert_eq!(chunk.get_segment(ColumnId(2)).unwrap_err().code(), "STORAGE_002");
	}

	#[test]
	fn test_append_copies_shared_segment() {
		let mut chunk = chunk();
		chunk.append(&[Value::Int4(1), Value::utf8("a")]).unwrap();

		let snapshot = chunk.clone();
		chunk.append(&[Value::Int4(2), Value::utf8("b")]).unwrap();

		assert_eq!(snapshot.size(), 1);
		assert_eq!(chunk.size(), 2);
	}
}
