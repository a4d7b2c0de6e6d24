// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// How a scan evaluates a predicate against reference segments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReferenceStrategy {
	/// Per-row lookups for short position lists, batch otherwise.
	#[default]
	Heuristic,
	/// Resolve every position through the generic value path.
	PerRow,
	/// Classify the referenced segments once, then read typed values.
	Batch,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
	pub reference_strategy: ReferenceStrategy,
	/// Position lists shorter than `batch_factor` times the referenced chunk
	/// count take the per-row path under [`ReferenceStrategy::Heuristic`].
	pub batch_factor: usize,
}

impl Default for ScanConfig {
	fn default() -> Self {
		Self {
			reference_strategy: ReferenceStrategy::Heuristic,
			batch_factor: 5,
		}
	}
}

impl ScanConfig {
	pub fn reference_strategy(mut self, strategy: ReferenceStrategy) -> Self {
		self.reference_strategy = strategy;
		self
	}

	pub fn batch_factor(mut self, factor: usize) -> Self {
		self.batch_factor = factor;
		self
	}

	pub fn use_batch(&self, pos_list_len: usize, referenced_chunk_count: u32) -> bool {
		match self.reference_strategy {
			ReferenceStrategy::PerRow => false,
			ReferenceStrategy::Batch => true,
			ReferenceStrategy::Heuristic => {
				pos_list_len >= self.batch_factor.saturating_mul(referenced_chunk_count as usize)
			}
		}
	}
}
