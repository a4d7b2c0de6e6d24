// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	mem::size_of,
	sync::Arc,
};

use strata_type::{ChunkOffset, ColumnId, PosList, Result, RowId, Type, Value};

use crate::{StorageError, Table};

/// A column of rows selected from another table.
///
/// Holds no data itself. Every segment of one result chunk shares the same
/// position list.
#[derive(Clone)]
pub struct ReferenceSegment {
	table: Arc<Table>,
	column_id: ColumnId,
	pos_list: Arc<PosList>,
}

impl ReferenceSegment {
	pub fn new(table: Arc<Table>, column_id: ColumnId, pos_list: Arc<PosList>) -> Self {
		Self {
			table,
			column_id,
			pos_list,
		}
	}

	pub fn referenced_table(&self) -> &Arc<Table> {
		&self.table
	}

	pub fn referenced_column_id(&self) -> ColumnId {
		self.column_id
	}

	pub fn pos_list(&self) -> &Arc<PosList> {
		&self.pos_list
	}

	pub fn referenced_type(&self) -> Result<Type> {
		self.table.column_type(self.column_id)
	}

	pub fn row_id(&self, offset: ChunkOffset) -> Result<RowId> {
		match self.pos_list.get(offset.index()) {
			Some(row_id) => Ok(*row_id),
			None => Err(StorageError::OffsetOutOfRange {
				offset,
				size: self.size(),
			}
			.into()),
		}
	}

	/// Resolves `offset` through the position list into the referenced column.
	pub fn value(&self, offset: ChunkOffset) -> Result<Value> {
		let row_id = self.row_id(offset)?;
		let chunk = self.table.get_chunk(row_id.chunk_id)?;
		chunk.get_segment(self.column_id)?.value(row_id.chunk_offset)
	}

	pub fn size(&self) -> usize {
		self.pos_list.len()
	}

	/// Only the position list is accounted to this segment, once per sharing
	/// segment.
	pub fn memory_usage(&self) -> usize {
		self.pos_list.len() * size_of::<RowId>()
	}
}

impl PartialEq for ReferenceSegment {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.table, &other.table)
			&& self.column_id == other.column_id
			&& (Arc::ptr_eq(&self.pos_list, &other.pos_list) || self.pos_list == other.pos_list)
	}
}

impl Debug for ReferenceSegment {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ReferenceSegment")
			.field("table", &Arc::as_ptr(&self.table))
			.field("column_id", &self.column_id)
			.field("rows", &self.pos_list.len())
			.finish()
	}
}
