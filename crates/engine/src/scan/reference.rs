// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use strata_storage::{Chunk, DictionarySegment, ReferenceSegment, Scalar, StorageError, ValueSegment};
use strata_type::{PosList, Result, RowId, return_internal_error};
use tracing::trace;

use super::compare::Compare;

/// Evaluates the predicate on the rows a reference segment selects and keeps
/// the matching referenced row ids, so results point at stored data directly.
pub(crate) fn scan_reference_segment<T: Scalar, C: Compare>(
	segment: &ReferenceSegment,
	search_value: &T,
	batch: bool,
	pos_list: &mut PosList,
) -> Result<()> {
	if batch {
		trace!(rows = segment.size(), "scanning reference segment in batch");
		scan_batch::<T, C>(segment, search_value, pos_list)
	} else {
		trace!(rows = segment.size(), "scanning reference segment per row");
		scan_per_row::<T, C>(segment, search_value, pos_list)
	}
}

fn scan_per_row<T: Scalar, C: Compare>(
	segment: &ReferenceSegment,
	search_value: &T,
	pos_list: &mut PosList,
) -> Result<()> {
	let table = segment.referenced_table();
	for row_id in segment.pos_list().iter() {
		let chunk = table.get_chunk(row_id.chunk_id)?;
		let referenced = chunk.get_segment(segment.referenced_column_id())?;
		let value = T::try_from_value(&referenced.value(row_id.chunk_offset)?)?;
		if C::compare(&value, search_value) {
			pos_list.push(*row_id);
		}
	}
	Ok(())
}

#[derive(Clone, Copy)]
enum Slot {
	Value(usize),
	Dictionary(usize),
}

fn scan_batch<T: Scalar, C: Compare>(
	segment: &ReferenceSegment,
	search_value: &T,
	pos_list: &mut PosList,
) -> Result<()> {
	let chunks: Vec<Arc<Chunk>> = segment.referenced_table().chunks();
	let column_id = segment.referenced_column_id();

	let mut value_segments: Vec<&ValueSegment<T>> = Vec::new();
	let mut dictionary_segments: Vec<&DictionarySegment<T>> = Vec::new();
	let mut slots = Vec::with_capacity(chunks.len());

	for chunk in &chunks {
		let referenced = chunk.get_segment(column_id)?;
		if let Some(values) = referenced.as_value::<T>() {
			slots.push(Slot::Value(value_segments.len()));
			value_segments.push(values);
		} else if let Some(dictionary) = referenced.as_dictionary::<T>() {
			slots.push(Slot::Dictionary(dictionary_segments.len()));
			dictionary_segments.push(dictionary);
		} else {
			return_internal_error!(
				"reference segments may only target {} value or dictionary segments, found a {} segment",
				T::get_type(),
				referenced.kind()
			);
		}
	}

	for row_id in segment.pos_list().iter() {
		let Some(slot) = slots.get(row_id.chunk_id.index()) else {
			return Err(StorageError::ChunkOutOfRange {
				chunk_id: row_id.chunk_id,
				chunk_count: chunks.len() as u32,
			}
			.into());
		};
		let value = match *slot {
			Slot::Value(index) => value_segments[index].get(row_id.chunk_offset),
			Slot::Dictionary(index) => dictionary_segments[index].get(row_id.chunk_offset),
		};
		let Some(value) = value else {
			return Err(out_of_range(row_id, chunks[row_id.chunk_id.index()].size() as usize));
		};
		if C::compare(value, search_value) {
			pos_list.push(*row_id);
		}
	}
	Ok(())
}

fn out_of_range(row_id: &RowId, size: usize) -> strata_type::Error {
	StorageError::OffsetOutOfRange {
		offset: row_id.chunk_offset,
		size,
	}
	.into()
}
