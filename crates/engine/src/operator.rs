// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use strata_storage::Table;
use strata_type::Result;

/// A read-only step of a query. Consumed by [`Operator::execute`], so every
/// instance runs at most once.
pub trait Operator {
	fn execute(self) -> Result<Arc<Table>>;
}
