// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use attribute_vector::{AttributeVector, AttributeVectorWidth};
pub use chunk::Chunk;
pub use compress::compress_chunk;
pub use config::TableConfig;
pub use error::StorageError;
pub use segment::{
	DictionaryData, DictionarySegment, ReferenceSegment, Scalar, Segment, SegmentKind, ValueData, ValueSegment,
};
pub use strata_type::Result;
pub use table::Table;

pub mod attribute_vector;
mod chunk;
mod compress;
mod config;
mod error;
pub mod segment;
mod table;
