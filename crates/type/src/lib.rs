// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod id;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic, TypeError};
pub use id::{ChunkId, ChunkOffset, ColumnId, INVALID_VALUE_ID, PosList, RowId, ValueId};
pub use value::{GetType, OrderedF32, OrderedF64, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
