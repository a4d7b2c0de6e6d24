// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use strata_catalog::Catalog;
use strata_storage::Table;
use strata_type::Result;
use tracing::instrument;

use crate::Operator;

/// Resolves a table by name.
pub struct GetTable {
	catalog: Catalog,
	name: String,
}

impl GetTable {
	pub fn new(catalog: &Catalog, name: impl Into<String>) -> Self {
		Self {
			catalog: catalog.clone(),
			name: name.into(),
		}
	}

	pub fn table_name(&self) -> &str {
		&self.name
	}
}

impl Operator for GetTable {
	#[instrument(name = "engine::get_table::execute", level = "debug", skip(self), fields(name = %self.name))]
	fn execute(self) -> Result<Arc<Table>> {
		self.catalog.get(&self.name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_output() {
		let catalog = Catalog::new();
		let table = Arc::new(Table::new(2));
		catalog.register("table_a", Arc::clone(&table)).unwrap();

		let get_table = GetTable::new(&catalog, "table_a");
		assert_eq!(get_table.table_name(), "table_a");
		assert!(Arc::ptr_eq(&get_table.execute().unwrap(), &table));
	}

	#[test]
	fn test_unknown_table_name() {
		let catalog = Catalog::new();
		let err = GetTable::new(&catalog, "unknown_table").execute().unwrap_err();
		assert_eq!(err.code(), "CATALOG_002");
	}
}
