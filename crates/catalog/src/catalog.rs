// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
	sync::Arc,
};

use crossbeam_skiplist::SkipMap;
use strata_storage::Table;
use strata_type::Result;
use tracing::instrument;

use crate::CatalogError;

/// Registry of named tables.
///
/// Cheap to clone; clones share the same set of tables. Create one per
/// process and hand it to whichever operator needs to resolve names.
#[derive(Clone, Default)]
pub struct Catalog(Arc<CatalogInner>);

#[derive(Default)]
pub struct CatalogInner {
	tables: SkipMap<String, Arc<Table>>,
}

impl Deref for Catalog {
	type Target = CatalogInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}
}

impl CatalogInner {
	#[instrument(name = "catalog::table::register", level = "debug", skip(self, name, table))]
	pub fn register(&self, name: impl Into<String>, table: Arc<Table>) -> Result<()> {
		let name = name.into();
		let mut inserted = false;
		self.tables.get_or_insert_with(name.clone(), || {
			inserted = true;
			table
		});

		if !inserted {
			return Err(CatalogError::AlreadyExists {
				name,
			}
			.into());
		}
		Ok(())
	}

	#[instrument(name = "catalog::table::remove", level = "debug", skip(self))]
	pub fn remove(&self, name: &str) -> Result<Arc<Table>> {
		match self.tables.remove(name) {
			Some(entry) => Ok(Arc::clone(entry.value())),
			None => Err(CatalogError::NotFound {
				name: name.to_string(),
			}
			.into()),
		}
	}

	#[instrument(name = "catalog::table::get", level = "trace", skip(self))]
	pub fn get(&self, name: &str) -> Result<Arc<Table>> {
		match self.tables.get(name) {
			Some(entry) => Ok(Arc::clone(entry.value())),
			None => Err(CatalogError::NotFound {
				name: name.to_string(),
			}
			.into()),
		}
	}

	pub fn exists(&self, name: &str) -> bool {
		self.tables.contains_key(name)
	}

	/// Registered names in ascending order.
	pub fn list(&self) -> Vec<String> {
		self.tables.iter().map(|entry| entry.key().clone()).collect()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Drops every registered table.
	#[instrument(name = "catalog::reset", level = "debug", skip(self))]
	pub fn reset(&self) {
		self.tables.clear();
	}
}

impl Display for Catalog {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		writeln!(f, "NAME, COLUMNS, ROWS, CHUNKS")?;
		for entry in self.tables.iter() {
			let table = entry.value();
			writeln!(
				f,
				"{}\t{}\t{}\t{}",
				entry.key(),
				table.column_count(),
				table.row_count(),
				table.chunk_count()
			)?;
		}
		Ok(())
	}
}
