// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Tuning knobs for a [`Table`](crate::Table).
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
	/// Maximum number of rows per chunk. Zero means chunks never fill up.
	pub chunk_size: u32,
}

impl TableConfig {
	pub fn chunk_size(mut self, chunk_size: u32) -> Self {
		self.chunk_size = chunk_size;
		self
	}
}
