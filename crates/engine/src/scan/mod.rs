// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use strata_storage::{Chunk, ReferenceSegment, Scalar, Segment, Table, with_scalar_type};
use strata_type::{ChunkId, ColumnId, PosList, Result, Value, internal_err};
use tracing::{debug, instrument};

pub mod compare;
mod dictionary;
mod reference;
mod value;
mod vector;

pub use compare::ScanType;
use compare::{Compare, with_comparator};

use crate::{Operator, ScanConfig, ScanError};

/// Selects the rows of one column that satisfy a comparison against a literal.
///
/// The result has the input's schema and a single chunk whose segments all
/// reference the same position list, in ascending row id order.
#[derive(Debug)]
pub struct TableScan {
	input: Arc<Table>,
	column_id: ColumnId,
	scan_type: ScanType,
	search_value: Value,
	config: ScanConfig,
}

impl TableScan {
	/// Fails if the literal's type differs from the column's type.
	pub fn new(
		input: Arc<Table>,
		column_id: ColumnId,
		scan_type: ScanType,
		search_value: impl Into<Value>,
	) -> Result<Self> {
		let search_value = search_value.into();
		let column_type = input.column_type(column_id)?;
		let literal_type = search_value.get_type();
		if column_type != literal_type {
			return Err(ScanError::LiteralType {
				column_id,
				column_type,
				literal_type,
			}
			.into());
		}

		Ok(Self {
			input,
			column_id,
			scan_type,
			search_value,
			config: ScanConfig::default(),
		})
	}

	pub fn with_config(mut self, config: ScanConfig) -> Self {
		self.config = config;
		self
	}

	pub fn column_id(&self) -> ColumnId {
		self.column_id
	}

	pub fn scan_type(&self) -> ScanType {
		self.scan_type
	}

	pub fn search_value(&self) -> &Value {
		&self.search_value
	}

	fn execute_typed<T: Scalar, C: Compare>(&self) -> Result<Arc<Table>> {
		let search_value = T::try_from_value(&self.search_value)?;
		let mut pos_list = PosList::new();
		let mut referenced_table: Option<Arc<Table>> = None;
		let mut stored = false;

		for (index, chunk) in self.input.chunks().iter().enumerate() {
			let chunk_id = ChunkId(index as u32);
			if chunk.column_count() == 0 {
				continue;
			}

			let segment = chunk.get_segment(self.column_id)?;
			match segment.as_ref() {
				// empty stored chunks, such as a freshly allocated tail, hold nothing to scan
				Segment::Value(_) | Segment::Dictionary(_) if segment.size() == 0 => {}
				Segment::Value(data) => {
					let Some(values) = T::value_segment(data) else {
						return internal_err!("column {} holds {} values", self.column_id, data.get_type());
					};
					self.check_stored(&referenced_table, chunk_id)?;
					stored = true;
					value::scan_value_segment::<T, C>(values, &search_value, chunk_id, &mut pos_list);
				}
				Segment::Dictionary(data) => {
					let Some(dictionary) = T::dictionary_segment(data) else {
						return internal_err!("column {} holds {} values", self.column_id, data.get_type());
					};
					self.check_stored(&referenced_table, chunk_id)?;
					stored = true;
					dictionary::scan_dictionary_segment::<T, C>(
						dictionary,
						&search_value,
						chunk_id,
						&mut pos_list,
					);
				}
				Segment::Reference(segment) => {
					let target = segment.referenced_table();
					let same_target = referenced_table.as_ref().is_none_or(|t| Arc::ptr_eq(t, target));
					if stored || !same_target {
						return Err(ScanError::MixedReferences {
							chunk_id,
						}
						.into());
					}

					let batch = self.config.use_batch(segment.size(), target.chunk_count());
					reference::scan_reference_segment::<T, C>(segment, &search_value, batch, &mut pos_list)?;
					referenced_table = Some(Arc::clone(target));
				}
			}
		}

		let referenced_table = referenced_table.unwrap_or_else(|| Arc::clone(&self.input));
		debug!(rows = pos_list.len(), "scan finished");
		self.build_result(referenced_table, pos_list)
	}

	fn check_stored(&self, referenced_table: &Option<Arc<Table>>, chunk_id: ChunkId) -> Result<()> {
		if referenced_table.is_some() {
			return Err(ScanError::MixedReferences {
				chunk_id,
			}
			.into());
		}
		Ok(())
	}

	fn build_result(&self, referenced_table: Arc<Table>, pos_list: PosList) -> Result<Arc<Table>> {
		let pos_list = Arc::new(pos_list);
		let mut result = Table::new(0);
		let mut chunk = Chunk::new();

		for (index, (name, ty)) in self.input.column_names().iter().zip(self.input.column_types()).enumerate() {
			result.add_column_definition(name.clone(), *ty)?;
			chunk.add_segment(Segment::from(ReferenceSegment::new(
				Arc::clone(&referenced_table),
				ColumnId(index as u16),
				Arc::clone(&pos_list),
			)));
		}

		result.emplace_chunk(chunk)?;
		Ok(Arc::new(result))
	}
}

impl Operator for TableScan {
	#[instrument(
		name = "engine::scan::execute",
		level = "debug",
		skip(self),
		fields(column_id = %self.column_id, scan_type = %self.scan_type, search_value = %self.search_value)
	)]
	fn execute(self) -> Result<Arc<Table>> {
		let column_type = self.input.column_type(self.column_id)?;
		with_scalar_type!(column_type, T => with_comparator!(self.scan_type, C => self.execute_typed::<T, C>()))
	}
}
