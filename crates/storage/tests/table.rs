// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Table level behaviour: chunking on append and the compression pass.

use std::{sync::Arc, thread};

use strata_storage::{SegmentKind, Table};
use strata_type::{ChunkId, ChunkOffset, ColumnId, Type, Value};

fn two_columns(chunk_size: u32) -> Table {
	let mut table = Table::new(chunk_size);
	table.add_column("id", Type::Int8).unwrap();
	table.add_column("name", Type::Utf8).unwrap();
	table
}

#[test]
fn test_append_chunking() {
	let table = two_columns(2);

	table.append(&[Value::Int8(1), Value::utf8("a")]).unwrap();
	assert_eq!(table.row_count(), 1);
	table.append(&[Value::Int8(2), Value::utf8("b")]).unwrap();
	assert_eq!(table.row_count(), 2);
	table.append(&[Value::Int8(3), Value::utf8("c")]).unwrap();
	assert_eq!(table.row_count(), 3);

	assert_eq!(table.chunk_count(), 2);
	assert_eq!(table.get_chunk(ChunkId(0)).unwrap().size(), 2);
	assert_eq!(table.get_chunk(ChunkId(1)).unwrap().size(), 1);
}

#[test]
fn test_compression_round_trip_all_types() {
	let mut table = Table::new(0);
	table.add_column("i4", Type::Int4).unwrap();
	table.add_column("i8", Type::Int8).unwrap();
	table.add_column("f4", Type::Float4).unwrap();
	table.add_column("f8", Type::Float8).unwrap();
	table.add_column("s", Type::Utf8).unwrap();

	let words = ["delta", "alpha", "delta", "charlie", "bravo", "alpha"];
	for (i, word) in words.iter().enumerate() {
		let n = (i % 4) as i32 - 1;
		table.append(&[
			Value::Int4(n),
			Value::Int8(n as i64 * 1000),
			Value::float4(n as f32 / 2.0).unwrap(),
			Value::float8(n as f64 * 0.25).unwrap(),
			Value::utf8(*word),
		])
		.unwrap();
	}

	let before = table.get_chunk(ChunkId(0)).unwrap();
	table.compress_chunk(ChunkId(0)).unwrap();
	let after = table.get_chunk(ChunkId(0)).unwrap();

	for column in 0..5 {
		let original = before.get_segment(ColumnId(column)).unwrap();
		let compressed = after.get_segment(ColumnId(column)).unwrap();
		assert_eq!(original.kind(), SegmentKind::Value);
		assert_eq!(compressed.kind(), SegmentKind::Dictionary);
		for offset in 0..words.len() as u32 {
			assert_eq!(
				original.value(ChunkOffset(offset)).unwrap(),
				compressed.value(ChunkOffset(offset)).unwrap()
			);
		}
	}
	assert!(after.memory_usage() < before.memory_usage());
}

#[test]
fn test_concurrent_compression_runs_once() {
	let table = Arc::new(two_columns(4));
	for i in 0..4 {
		table.append(&[Value::Int8(i), Value::utf8("x")]).unwrap();
	}

	let handles: Vec<_> = (0..8)
		.map(|_| {
			let table = Arc::clone(&table);
			thread::spawn(move || table.compress_chunk(ChunkId(0)).unwrap())
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	let chunk = table.get_chunk(ChunkId(0)).unwrap();
	assert!(table.is_compressed(ChunkId(0)).unwrap());
	assert!(chunk.get_segment(ColumnId(0)).unwrap().as_dictionary::<i64>().is_some());
	assert_eq!(table.row_count(), 4);
}
