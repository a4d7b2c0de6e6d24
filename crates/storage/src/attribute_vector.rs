// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Compact storage for the dictionary codes of a segment.
//!
//! The element width is chosen once, from the number of distinct values the
//! dictionary holds, and never changes afterwards. Callers stay width-agnostic
//! through [`AttributeVector::get`] and [`AttributeVector::set`]; the scan fast
//! path matches on the variant to compare raw codes without widening them.

use std::mem::size_of;

use strata_type::{ChunkOffset, Result, ValueId, internal_err, return_internal_error};

use crate::StorageError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttributeVectorWidth {
	U8,
	U16,
	U32,
}

impl AttributeVectorWidth {
	/// Smallest width whose maximum code strictly exceeds every code needed for
	/// `distinct` entries.
	pub fn for_distinct_count(distinct: usize) -> Result<Self> {
		if distinct < u8::MAX as usize {
			Ok(AttributeVectorWidth::U8)
		} else if distinct < u16::MAX as usize {
			Ok(AttributeVectorWidth::U16)
		} else if distinct < u32::MAX as usize {
			Ok(AttributeVectorWidth::U32)
		} else {
			internal_err!("dictionary with {} distinct values exceeds the value id range", distinct)
		}
	}

	pub fn bytes(self) -> u8 {
		match self {
			AttributeVectorWidth::U8 => 1,
			AttributeVectorWidth::U16 => 2,
			AttributeVectorWidth::U32 => 4,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeVector {
	U8(Vec<u8>),
	U16(Vec<u16>),
	U32(Vec<u32>),
}

impl AttributeVector {
	/// A vector of `size` zero codes.
	pub fn new(width: AttributeVectorWidth, size: usize) -> Self {
		match width {
			AttributeVectorWidth::U8 => AttributeVector::U8(vec![0; size]),
			AttributeVectorWidth::U16 => AttributeVector::U16(vec![0; size]),
			AttributeVectorWidth::U32 => AttributeVector::U32(vec![0; size]),
		}
	}

	pub fn get(&self, offset: ChunkOffset) -> Option<ValueId> {
		let i = offset.index();
		match self {
			AttributeVector::U8(codes) => codes.get(i).map(|&c| ValueId(c as u32)),
			AttributeVector::U16(codes) => codes.get(i).map(|&c| ValueId(c as u32)),
			AttributeVector::U32(codes) => codes.get(i).map(|&c| ValueId(c)),
		}
	}

	pub fn set(&mut self, offset: ChunkOffset, value_id: ValueId) -> Result<()> {
		let size = self.size();
		let i = offset.index();
		if i >= size {
			return Err(StorageError::OffsetOutOfRange {
				offset,
				size,
			}
			.into());
		}

		match self {
			AttributeVector::U8(codes) => match u8::try_from(value_id.0) {
				Ok(code) => codes[i] = code,
				Err(_) => return_internal_error!("value id {} does not fit a 1 byte attribute vector", value_id),
			},
			AttributeVector::U16(codes) => match u16::try_from(value_id.0) {
				Ok(code) => codes[i] = code,
				Err(_) => return_internal_error!("value id {} does not fit a 2 byte attribute vector", value_id),
			},
			AttributeVector::U32(codes) => codes[i] = value_id.0,
		}
		Ok(())
	}

	pub fn size(&self) -> usize {
		match self {
			AttributeVector::U8(codes) => codes.len(),
			AttributeVector::U16(codes) => codes.len(),
			AttributeVector::U32(codes) => codes.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.size() == 0
	}

	pub fn width(&self) -> AttributeVectorWidth {
		match self {
			AttributeVector::U8(_) => AttributeVectorWidth::U8,
			AttributeVector::U16(_) => AttributeVectorWidth::U16,
			AttributeVector::U32(_) => AttributeVectorWidth::U32,
		}
	}

	pub fn memory_usage(&self) -> usize {
		match self {
			AttributeVector::U8(codes) => codes.len() * size_of::<u8>(),
			AttributeVector::U16(codes) => codes.len() * size_of::<u16>(),
			AttributeVector::U32(codes) => codes.len() * size_of::<u32>(),
		}
	}
}
