// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Predicate evaluation on dictionary segments.
//!
//! The literal is located in the dictionary once with `lower_bound`; every
//! row is then decided by comparing its code against that position. Which
//! comparison to run depends on whether the literal is beyond every entry,
//! present in the dictionary, or falls between two entries.

use strata_storage::{DictionarySegment, Scalar};
use strata_type::{ChunkId, PosList};

use super::{
	ScanType,
	compare::{Compare, GreaterThanEqual, LessThan},
	vector::{full_scan, scan_attribute_vector},
};

pub(crate) fn scan_dictionary_segment<T: Scalar, C: Compare>(
	segment: &DictionarySegment<T>,
	search_value: &T,
	chunk_id: ChunkId,
	pos_list: &mut PosList,
) {
	let attribute_vector = segment.attribute_vector();
	let search_value_id = segment.lower_bound(search_value);

	// literal exceeds every entry
	if !search_value_id.is_valid() {
		if matches!(C::SCAN_TYPE, ScanType::LessThan | ScanType::LessThanEquals | ScanType::NotEquals) {
			full_scan(attribute_vector, chunk_id, pos_list);
		}
		return;
	}

	if matches!(C::SCAN_TYPE, ScanType::GreaterThanEquals | ScanType::LessThan)
		|| segment.value_by_value_id(search_value_id) == Some(search_value)
	{
		scan_attribute_vector::<C>(attribute_vector, search_value_id, chunk_id, pos_list);
		return;
	}

	// literal lies strictly between two entries, so no row equals it
	match C::SCAN_TYPE {
		ScanType::NotEquals => full_scan(attribute_vector, chunk_id, pos_list),
		ScanType::GreaterThan => {
			scan_attribute_vector::<GreaterThanEqual>(attribute_vector, search_value_id, chunk_id, pos_list)
		}
		ScanType::LessThanEquals => {
			scan_attribute_vector::<LessThan>(attribute_vector, search_value_id, chunk_id, pos_list)
		}
		ScanType::Equals | ScanType::GreaterThanEquals | ScanType::LessThan => {}
	}
}
