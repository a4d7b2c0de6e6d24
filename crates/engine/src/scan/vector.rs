// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_storage::AttributeVector;
use strata_type::{ChunkId, ChunkOffset, INVALID_VALUE_ID, PosList, RowId, ValueId};

use super::compare::{Compare, NotEqual};

/// Appends the row id of every element of `data` satisfying `C` against
/// `search_value`, in offset order.
pub(crate) fn scan_vector<C: Compare, T: PartialOrd>(
	data: &[T],
	search_value: &T,
	chunk_id: ChunkId,
	pos_list: &mut PosList,
) {
	for (offset, value) in data.iter().enumerate() {
		if C::compare(value, search_value) {
			pos_list.push(RowId::new(chunk_id, ChunkOffset(offset as u32)));
		}
	}
}

/// An attribute vector element type. A value id too large for the width
/// saturates to the width's maximum, which no stored code reaches.
trait Code: Copy + PartialOrd {
	fn from_value_id(value_id: ValueId) -> Self;
}

impl Code for u8 {
	fn from_value_id(value_id: ValueId) -> Self {
		u8::try_from(value_id.0).unwrap_or(u8::MAX)
	}
}

impl Code for u16 {
	fn from_value_id(value_id: ValueId) -> Self {
		u16::try_from(value_id.0).unwrap_or(u16::MAX)
	}
}

impl Code for u32 {
	fn from_value_id(value_id: ValueId) -> Self {
		value_id.0
	}
}

fn scan_codes<C: Compare, W: Code>(codes: &[W], search_value_id: ValueId, chunk_id: ChunkId, pos_list: &mut PosList) {
	scan_vector::<C, W>(codes, &W::from_value_id(search_value_id), chunk_id, pos_list);
}

/// Compares raw codes against `search_value_id` without decoding them.
pub(crate) fn scan_attribute_vector<C: Compare>(
	attribute_vector: &AttributeVector,
	search_value_id: ValueId,
	chunk_id: ChunkId,
	pos_list: &mut PosList,
) {
	match attribute_vector {
		AttributeVector::U8(codes) => scan_codes::<C, u8>(codes, search_value_id, chunk_id, pos_list),
		AttributeVector::U16(codes) => scan_codes::<C, u16>(codes, search_value_id, chunk_id, pos_list),
		AttributeVector::U32(codes) => scan_codes::<C, u32>(codes, search_value_id, chunk_id, pos_list),
	}
}

/// Matches every row: no stored code equals the invalid id.
pub(crate) fn full_scan(attribute_vector: &AttributeVector, chunk_id: ChunkId, pos_list: &mut PosList) {
	scan_attribute_vector::<NotEqual>(attribute_vector, INVALID_VALUE_ID, chunk_id, pos_list);
}
