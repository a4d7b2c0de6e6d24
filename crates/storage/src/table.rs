// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use parking_lot::{Mutex, RwLock};
use strata_type::{ChunkId, ColumnId, Result, Type, Value, return_internal_error};
use tracing::{debug, instrument, trace};

use crate::{Chunk, Segment, StorageError, TableConfig, compress};

/// A chunked, column-oriented table.
///
/// The schema is fixed once the first row exists. Rows are appended to the
/// tail chunk; once it holds `chunk_size` rows a fresh tail is allocated.
/// Chunks can be compressed individually into dictionary-encoded form.
///
/// Lock order is `chunks` before `compressed`.
pub struct Table {
	chunk_size: u32,
	column_names: Vec<String>,
	column_types: Vec<Type>,
	name_column_map: HashMap<String, ColumnId>,
	chunks: RwLock<Vec<Arc<Chunk>>>,
	compressed: Mutex<Vec<bool>>,
}

impl Table {
	/// A table whose chunks hold at most `chunk_size` rows, zero meaning no bound.
	pub fn new(chunk_size: u32) -> Self {
		Self::with_config(TableConfig::default().chunk_size(chunk_size))
	}

	pub fn with_config(config: TableConfig) -> Self {
		Self {
			chunk_size: config.chunk_size,
			column_names: Vec::new(),
			column_types: Vec::new(),
			name_column_map: HashMap::new(),
			chunks: RwLock::new(vec![Arc::new(Chunk::new())]),
			compressed: Mutex::new(vec![false]),
		}
	}

	/// Records a column in the schema without touching any chunk.
	pub fn add_column_definition(&mut self, name: impl Into<String>, ty: Type) -> Result<()> {
		let name = name.into();
		let row_count = self.row_count();
		if row_count > 0 {
			return Err(StorageError::ColumnAfterRows {
				name,
				row_count,
			}
			.into());
		}
		if self.name_column_map.contains_key(&name) {
			return Err(StorageError::DuplicateColumn {
				name,
			}
			.into());
		}

		// the count itself must stay representable, so ids end at u16::MAX - 1
		let Ok(column_count) = u16::try_from(self.column_names.len() + 1) else {
			return Err(StorageError::TooManyColumns {
				name,
				limit: u16::MAX,
			}
			.into());
		};
		let column_id = ColumnId(column_count - 1);
		self.name_column_map.insert(name.clone(), column_id);
		self.column_names.push(name);
		self.column_types.push(ty);
		Ok(())
	}

	#[instrument(name = "storage::table::add_column", level = "debug", skip(self, name))]
	pub fn add_column(&mut self, name: impl Into<String>, ty: Type) -> Result<()> {
		self.add_column_definition(name, ty)?;
		for chunk in self.chunks.get_mut().iter_mut() {
			Arc::make_mut(chunk).add_segment(Segment::value_segment(ty));
		}
		Ok(())
	}

	/// Appends one row. The row is checked against the schema before any
	/// segment is touched.
	#[instrument(name = "storage::table::append", level = "trace", skip(self, values))]
	pub fn append(&self, values: &[Value]) -> Result<()> {
		self.check_row(values)?;

		let mut chunks = self.chunks.write();
		if self.compressed.lock().last().copied().unwrap_or(false) {
			debug!("tail chunk is compressed, allocating a new one");
			self.push_chunk(&mut chunks);
		}

		let Some(tail) = chunks.last_mut() else {
			return_internal_error!("table holds no chunk to append to");
		};
		Arc::make_mut(tail).append(values)?;

		if self.chunk_size != 0 && tail.size() >= self.chunk_size {
			debug!(chunk_size = self.chunk_size, "tail chunk full, allocating a new one");
			self.push_chunk(&mut chunks);
		}
		Ok(())
	}

	fn check_row(&self, values: &[Value]) -> Result<()> {
		if values.len() != self.column_types.len() {
			return Err(StorageError::ArgumentCount {
				expected: self.column_types.len(),
				actual: values.len(),
			}
			.into());
		}
		for (value, ty) in values.iter().zip(&self.column_types) {
			value.expect_type(*ty)?;
		}
		Ok(())
	}

	fn new_chunk(&self) -> Chunk {
		let mut chunk = Chunk::new();
		for ty in &self.column_types {
			chunk.add_segment(Segment::value_segment(*ty));
		}
		chunk
	}

	fn push_chunk(&self, chunks: &mut Vec<Arc<Chunk>>) {
		let mut compressed = self.compressed.lock();
		chunks.push(Arc::new(self.new_chunk()));
		compressed.push(false);
	}

	/// Installs a pre-built chunk: it replaces the tail if the tail is empty,
	/// otherwise it becomes the new tail.
	#[instrument(name = "storage::table::emplace_chunk", level = "debug", skip(self, chunk), fields(rows = chunk.size()))]
	pub fn emplace_chunk(&self, chunk: Chunk) -> Result<()> {
		if chunk.segments().len() != self.column_names.len() {
			return Err(StorageError::ChunkColumnCount {
				expected: self.column_names.len(),
				actual: chunk.segments().len(),
			}
			.into());
		}

		let mut chunks = self.chunks.write();
		let mut compressed = self.compressed.lock();
		match chunks.last_mut() {
			Some(tail) if tail.is_empty() => {
				*tail = Arc::new(chunk);
				if let Some(flag) = compressed.last_mut() {
					*flag = false;
				}
			}
			_ => {
				chunks.push(Arc::new(chunk));
				compressed.push(false);
			}
		}
		Ok(())
	}

	/// Replaces the chunk with its dictionary-encoded form. Runs at most once
	/// per chunk, even under concurrent callers; later calls return immediately.
	/// A chunk without rows is left as is, so an empty tail stays the append target.
	#[instrument(name = "storage::table::compress_chunk", level = "debug", skip(self))]
	pub fn compress_chunk(&self, chunk_id: ChunkId) -> Result<()> {
		{
			let chunks = self.chunks.read();
			let mut compressed = self.compressed.lock();
			let (Some(chunk), Some(flag)) = (chunks.get(chunk_id.index()), compressed.get_mut(chunk_id.index()))
			else {
				return Err(StorageError::ChunkOutOfRange {
					chunk_id,
					chunk_count: chunks.len() as u32,
				}
				.into());
			};
			if *flag {
				trace!("chunk already compressed");
				return Ok(());
			}
			if chunk.is_empty() {
				trace!("chunk holds no rows");
				return Ok(());
			}
			*flag = true;
		}

		let chunk = self.get_chunk(chunk_id)?;
		let result = compress::compress_chunk(&chunk);
		match result {
			Ok(compressed_chunk) => {
				self.chunks.write()[chunk_id.index()] = Arc::new(compressed_chunk);
				Ok(())
			}
			Err(err) => {
				self.compressed.lock()[chunk_id.index()] = false;
				Err(err)
			}
		}
	}

	pub fn is_compressed(&self, chunk_id: ChunkId) -> Result<bool> {
		let compressed = self.compressed.lock();
		match compressed.get(chunk_id.index()) {
			Some(flag) => Ok(*flag),
			None => Err(StorageError::ChunkOutOfRange {
				chunk_id,
				chunk_count: compressed.len() as u32,
			}
			.into()),
		}
	}

	pub fn get_chunk(&self, chunk_id: ChunkId) -> Result<Arc<Chunk>> {
		let chunks = self.chunks.read();
		match chunks.get(chunk_id.index()) {
			Some(chunk) => Ok(Arc::clone(chunk)),
			None => Err(StorageError::ChunkOutOfRange {
				chunk_id,
				chunk_count: chunks.len() as u32,
			}
			.into()),
		}
	}

	/// Snapshot of the current chunk handles, in chunk order.
	pub fn chunks(&self) -> Vec<Arc<Chunk>> {
		self.chunks.read().clone()
	}

	pub fn chunk_count(&self) -> u32 {
		self.chunks.read().len() as u32
	}

	pub fn row_count(&self) -> u64 {
		self.chunks.read().iter().map(|chunk| chunk.size() as u64).sum()
	}

	pub fn chunk_size(&self) -> u32 {
		self.chunk_size
	}

	/// Never exceeds `u16::MAX`; `add_column_definition` rejects further columns.
	pub fn column_count(&self) -> u16 {
		self.column_names.len() as u16
	}

	pub fn column_names(&self) -> &[String] {
		&self.column_names
	}

	pub fn column_types(&self) -> &[Type] {
		&self.column_types
	}

	pub fn column_id_by_name(&self, name: &str) -> Result<ColumnId> {
		match self.name_column_map.get(name) {
			Some(column_id) => Ok(*column_id),
			None => Err(StorageError::UnknownColumn {
				name: name.to_string(),
			}
			.into()),
		}
	}

	pub fn column_name(&self, column_id: ColumnId) -> Result<&str> {
		match self.column_names.get(column_id.index()) {
			Some(name) => Ok(name),
			None => Err(self.column_out_of_range(column_id)),
		}
	}

	pub fn column_type(&self, column_id: ColumnId) -> Result<Type> {
		match self.column_types.get(column_id.index()) {
			Some(ty) => Ok(*ty),
			None => Err(self.column_out_of_range(column_id)),
		}
	}

	fn column_out_of_range(&self, column_id: ColumnId) -> strata_type::Error {
		StorageError::ColumnOutOfRange {
			column_id,
			column_count: self.column_count(),
		}
		.into()
	}

	pub fn memory_usage(&self) -> usize {
		self.chunks.read().iter().map(|chunk| chunk.memory_usage()).sum()
	}
}

impl Debug for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("chunk_size", &self.chunk_size)
			.field("column_names", &self.column_names)
			.field("column_types", &self.column_types)
			.field("chunk_count", &self.chunk_count())
			.field("row_count", &self.row_count())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use strata_type::ChunkOffset;

	use super::*;
	use crate::SegmentKind;

	fn table() -> Table {
		let mut table = Table::new(2);
		table.add_column("col_1", Type::Int4).unwrap();
		table.add_column("col_2", Type::Utf8).unwrap();
		table
	}

	fn fill(table: &Table) {
		table.append(&[Value::Int4(4), Value::utf8("Hello,")]).unwrap();
		table.append(&[Value::Int4(6), Value::utf8("world")]).unwrap();
		table.append(&[Value::Int4(3), Value::utf8("!")]).unwrap();
	}

	#[test]
	fn test_append_wrong_argument_count() {
		let table = table();
		let err = table.append(&[Value::Int4(4), Value::utf8("Hello,"), Value::Int4(45)]).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_001");
		assert_eq!(table.row_count(), 0);
	}

	#[test]
	fn test_append_wrong_type() {
		let table = table();
		let err = table.append(&[Value::utf8("4"), Value::utf8("Hello,")]).unwrap_err();
		assert_eq!(err.code(), "TYPE_001");
		assert_eq!(table.row_count(), 0);
	}

	#[test]
	fn test_chunk_count() {
		let table = table();
		assert_eq!(table.chunk_count(), 1);
		fill(&table);
		assert_eq!(table.chunk_count(), 2);
		assert_eq!(table.get_chunk(ChunkId(0)).unwrap().size(), 2);
		assert_eq!(table.get_chunk(ChunkId(1)).unwrap().size(), 1);
	}

	#[test]
	fn test_get_chunk() {
		let table = table();
		table.get_chunk(ChunkId(0)).unwrap();
		assert_eq!(table.get_chunk(ChunkId(1)).unwrap_err().code(), "STORAGE_001");
		fill(&table);
		table.get_chunk(ChunkId(1)).unwrap();
	}

	#[test]
	fn test_add_column() {
		let mut table = table();
		assert_eq!(table.column_count(), 2);
		table.add_column("col_0", Type::Int4).unwrap();
		assert_eq!(table.column_count(), 3);

		assert_eq!(table.add_column("col_0", Type::Int4).unwrap_err().code(), "SCHEMA_002");

		table.append(&[Value::Int4(4), Value::utf8("Hello,"), Value::Int4(5)]).unwrap();
		assert_eq!(table.add_column("col_28", Type::Utf8).unwrap_err().code(), "SCHEMA_003");
	}

	#[test]
	fn test_row_count() {
		let table = table();
		assert_eq!(table.row_count(), 0);
		table.append(&[Value::Int4(4), Value::utf8("Hello,")]).unwrap();
		assert_eq!(table.row_count(), 1);
		table.append(&[Value::Int4(6), Value::utf8("world")]).unwrap();
		assert_eq!(table.row_count(), 2);
		table.append(&[Value::Int4(3), Value::utf8("!")]).unwrap();
		assert_eq!(table.row_count(), 3);
	}

	#[test]
	fn test_column_lookups() {
		let table = table();
		assert_eq!(table.column_name(ColumnId(0)).unwrap(), "col_1");
		assert_eq!(table.column_name(ColumnId(1)).unwrap(), "col_2");
		assert_eq!(table.column_name(ColumnId(2)).unwrap_err().code(), "STORAGE_002");

		assert_eq!(table.column_type(ColumnId(0)).unwrap(), Type::Int4);
		assert_eq!(table.column_type(ColumnId(1)).unwrap(), Type::Utf8);
		assert_eq!(table.column_type(ColumnId(2)).unwrap_err().code(), "STORAGE_002");

		assert_eq!(table.column_id_by_name("col_2").unwrap(), ColumnId(1));
		assert_eq!(table.column_id_by_name("no_column_name").unwrap_err().code(), "SCHEMA_004");

		assert_eq!(table.chunk_size(), 2);
	}

	#[test]
	fn test_compress_chunk() {
		let table = table();
		table.append(&[Value::Int4(1), Value::utf8("Hello")]).unwrap();
		table.append(&[Value::Int4(2), Value::utf8("World")]).unwrap();

		table.compress_chunk(ChunkId(0)).unwrap();
		assert!(table.is_compressed(ChunkId(0)).unwrap());
		assert!(!table.is_compressed(ChunkId(1)).unwrap());

		let chunk = table.get_chunk(ChunkId(0)).unwrap();
		let segment = chunk.get_segment(ColumnId(0)).unwrap();
		assert!(segment.as_dictionary::<i32>().is_some());
		assert_eq!(segment.value(ChunkOffset(1)).unwrap(), Value::Int4(2));
	}

	#[test]
	fn test_compress_chunk_is_idempotent() {
		let table = table();
		fill(&table);
		table.compress_chunk(ChunkId(0)).unwrap();
		let first = table.get_chunk(ChunkId(0)).unwrap();

		table.compress_chunk(ChunkId(0)).unwrap();
		let second = table.get_chunk(ChunkId(0)).unwrap();

		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(table.compress_chunk(ChunkId(9)).unwrap_err().code(), "STORAGE_001");
	}

	#[test]
	fn test_append_after_compressed_tail() {
		let table = table();
		table.append(&[Value::Int4(1), Value::utf8("a")]).unwrap();
		table.compress_chunk(ChunkId(0)).unwrap();

		table.append(&[Value::Int4(2), Value::utf8("b")]).unwrap();

		assert_eq!(table.chunk_count(), 2);
		assert_eq!(table.row_count(), 2);
		let tail = table.get_chunk(ChunkId(1)).unwrap();
		assert_eq!(tail.get_segment(ColumnId(0)).unwrap().kind(), SegmentKind::Value);
	}

	#[test]
	fn test_emplace_chunk() {
		let table = table();
		assert_eq!(table.chunk_count(), 1);

		let mut chunk = Chunk::new();
		chunk.add_segment(Segment::value_segment(Type::Int4));
		chunk.add_segment(Segment::value_segment(Type::Utf8));
		chunk.append(&[Value::Int4(42), Value::utf8("test_string")]).unwrap();
		table.emplace_chunk(chunk).unwrap();
		assert_eq!(table.chunk_count(), 1);

		let mut empty = Chunk::new();
		empty.add_segment(Segment::value_segment(Type::Int4));
		empty.add_segment(Segment::value_segment(Type::Utf8));
		table.emplace_chunk(empty).unwrap();
		assert_eq!(table.chunk_count(), 2);

		let narrow = Chunk::new();
		assert_eq!(table.emplace_chunk(narrow).unwrap_err().code(), "SCHEMA_005");
	}

	#[test]
	fn test_compress_empty_tail_is_noop() {
		let table = table();
		table.compress_chunk(ChunkId(0)).unwrap();
		assert!(!table.is_compressed(ChunkId(0)).unwrap());

		table.append(&[Value::Int4(1), Value::utf8("a")]).unwrap();
		assert_eq!(table.chunk_count(), 1);
		assert_eq!(table.get_chunk(ChunkId(0)).unwrap().size(), 1);

		table.compress_chunk(ChunkId(0)).unwrap();
		assert!(table.is_compressed(ChunkId(0)).unwrap());
	}

	#[test]
	fn test_column_limit() {
		let mut table = Table::new(0);
		for i in 0..u16::MAX {
			table.add_column_definition(format!("c{}", i), Type::Int4).unwrap();
		}
		assert_eq!(table.column_count(), u16::MAX);
		assert_eq!(table.column_id_by_name("c65534").unwrap(), ColumnId(u16::MAX - 1));

		let err = table.add_column_definition("one_too_many", Type::Int4).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_006");
		assert_eq!(table.column_count(), u16::MAX);
		assert_eq!(table.column_id_by_name("c0").unwrap(), ColumnId(0));
		assert_eq!(table.column_id_by_name("one_too_many").unwrap_err().code(), "SCHEMA_004");
	}

	#[test]
	fn test_unbounded_chunk_size() {
		let mut table = Table::new(0);
		table.add_column("a", Type::Int8).unwrap();
		for i in 0..100 {
			table.append(&[Value::Int8(i)]).unwrap();
		}
		assert_eq!(table.chunk_count(), 1);
		assert_eq!(table.row_count(), 100);
	}

	#[test]
	fn test_chunks_snapshot_survives_append() {
		let table = table();
		table.append(&[Value::Int4(1), Value::utf8("a")]).unwrap();
		let snapshot = table.chunks();

		table.append(&[Value::Int4(2), Value::utf8("b")]).unwrap();
		assert_eq!(snapshot[0].size(), 1);
		assert_eq!(table.get_chunk(ChunkId(0)).unwrap().size(), 2);
	}
}
