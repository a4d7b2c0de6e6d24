// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use config::{ReferenceStrategy, ScanConfig};
pub use error::ScanError;
pub use get_table::GetTable;
pub use operator::Operator;
pub use scan::{ScanType, TableScan};
pub use strata_type::Result;

mod config;
mod error;
mod get_table;
mod operator;
pub mod scan;
