// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

macro_rules! define_id {
	($(#[$meta:meta])* $name:ident($inner:ty)) => {
		$(#[$meta])*
		#[repr(transparent)]
		#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub $inner);

		impl $name {
			/// Position usable for indexing into the backing collection.
			pub fn index(self) -> usize {
				self.0 as usize
			}
		}

		impl Deref for $name {
			type Target = $inner;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl PartialEq<$inner> for $name {
			fn eq(&self, other: &$inner) -> bool {
				self.0.eq(other)
			}
		}

		impl From<$name> for $inner {
			fn from(value: $name) -> Self {
				value.0
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				Display::fmt(&self.0, f)
			}
		}
	};
}

define_id!(
	/// Position of a column within a table schema.
	ColumnId(u16)
);

define_id!(
	/// Position of a chunk within a table.
	ChunkId(u32)
);

define_id!(
	/// Position of a row within a chunk.
	ChunkOffset(u32)
);

define_id!(
	/// Position of an entry within a dictionary, or the encoded code stored in an
	/// attribute vector.
	ValueId(u32)
);

/// Returned by dictionary searches when no entry satisfies the bound. Never stored
/// in an attribute vector.
pub const INVALID_VALUE_ID: ValueId = ValueId(u32::MAX);

impl ValueId {
	pub fn is_valid(self) -> bool {
		self != INVALID_VALUE_ID
	}
}

/// Global address of a row within one table.
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct RowId {
	pub chunk_id: ChunkId,
	pub chunk_offset: ChunkOffset,
}

impl RowId {
	pub fn new(chunk_id: ChunkId, chunk_offset: ChunkOffset) -> Self {
		Self {
			chunk_id,
			chunk_offset,
		}
	}
}

impl Display for RowId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.chunk_id, self.chunk_offset)
	}
}

/// Ordered selection of rows, shared by every reference segment of one result chunk.
pub type PosList = Vec<RowId>;
