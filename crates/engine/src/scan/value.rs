// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_storage::{Scalar, ValueSegment};
use strata_type::{ChunkId, PosList};

use super::{compare::Compare, vector::scan_vector};

pub(crate) fn scan_value_segment<T: Scalar, C: Compare>(
	segment: &ValueSegment<T>,
	search_value: &T,
	chunk_id: ChunkId,
	pos_list: &mut PosList,
) {
	scan_vector::<C, T>(segment.values(), search_value, chunk_id, pos_list);
}
