// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use strata_type::{ChunkOffset, Result};
use tracing::instrument;

use crate::{Chunk, DictionarySegment, Scalar, Segment, ValueSegment, with_scalar_type};

/// Builds a dictionary-encoded copy of `chunk`.
///
/// Dictionary segments are shared unchanged. Reference segments are
/// materialized through their generic read path.
#[instrument(name = "storage::compress::chunk", level = "trace", skip(chunk), fields(rows = chunk.size()))]
pub fn compress_chunk(chunk: &Chunk) -> Result<Chunk> {
	let mut result = Chunk::new();
	for segment in chunk.segments() {
		let compressed = match segment.as_ref() {
			Segment::Value(data) => Arc::new(Segment::Dictionary(data.compress()?)),
			Segment::Dictionary(_) => Arc::clone(segment),
			Segment::Reference(reference) => {
				let ty = reference.referenced_type()?;
				with_scalar_type!(ty, T => Arc::new(materialize::<T>(segment)?))
			}
		};
		result.add_segment(compressed);
	}
	Ok(result)
}

fn materialize<T: Scalar>(segment: &Segment) -> Result<Segment> {
	let mut values = ValueSegment::<T>::new();
	for offset in 0..segment.size() as u32 {
		values.push(T::try_from_value(&segment.value(ChunkOffset(offset))?)?);
	}
	Ok(DictionarySegment::from_segment(&values)?.into())
}
