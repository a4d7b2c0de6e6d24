// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tables used across integration tests.

use strata_storage::Table;
use strata_type::{ChunkId, ChunkOffset, ColumnId, PosList, RowId, Type, Value};

/// Builds a table from a schema and rows. Panics on malformed input.
pub fn table(chunk_size: u32, columns: &[(&str, Type)], rows: impl IntoIterator<Item = Vec<Value>>) -> Table {
	let mut table = Table::new(chunk_size);
	for (name, ty) in columns {
		table.add_column(*name, *ty).unwrap();
	}
	for row in rows {
		table.append(&row).unwrap();
	}
	table
}

/// Single `Int4` column named `col_1`.
pub fn int_table(chunk_size: u32, values: impl IntoIterator<Item = i32>) -> Table {
	table(chunk_size, &[("col_1", Type::Int4)], values.into_iter().map(|v| vec![Value::Int4(v)]))
}

/// Columns `a: Int4`, `b: Float8`, `c: Utf8` over rows `0..n`, with repeating
/// values so that dictionaries stay smaller than the row count.
pub fn mixed_table(chunk_size: u32, n: i32) -> Table {
	let words = ["apple", "banana", "cherry", "damson", "elder"];
	table(
		chunk_size,
		&[("a", Type::Int4), ("b", Type::Float8), ("c", Type::Utf8)],
		(0..n).map(|i| {
			vec![
				Value::Int4(i % 17),
				Value::float8((i % 7) as f64 * 1.5).unwrap(),
				Value::utf8(words[i as usize % words.len()]),
			]
		}),
	)
}

/// Compresses every chunk that holds rows.
pub fn compress_all(table: &Table) {
	for (chunk_id, chunk) in table.chunks().iter().enumerate() {
		if !chunk.is_empty() {
			table.compress_chunk(ChunkId(chunk_id as u32)).unwrap();
		}
	}
}

/// Every value of `column_id`, chunk by chunk, read through the generic path.
pub fn column_values(table: &Table, column_id: ColumnId) -> Vec<Value> {
	let mut result = Vec::new();
	for chunk in table.chunks() {
		let segment = chunk.get_segment(column_id).unwrap();
		for offset in 0..chunk.size() {
			result.push(segment.value(ChunkOffset(offset)).unwrap());
		}
	}
	result
}

/// Concatenated position lists of a scan result, read from its first column.
pub fn pos_list(table: &Table) -> PosList {
	let mut result = Vec::new();
	for chunk in table.chunks() {
		if chunk.column_count() == 0 {
			continue;
		}
		let segment = chunk.get_segment(ColumnId(0)).unwrap();
		let reference = segment.as_reference().expect("scan results hold reference segments");
		result.extend(reference.pos_list().iter().copied());
	}
	result
}

/// Row ids of `offsets` within chunk `chunk_id`.
pub fn rows(chunk_id: u32, offsets: impl IntoIterator<Item = u32>) -> PosList {
	offsets.into_iter().map(|offset| RowId::new(ChunkId(chunk_id), ChunkOffset(offset))).collect()
}
