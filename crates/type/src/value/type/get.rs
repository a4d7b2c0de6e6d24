// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{OrderedF32, OrderedF64, Type};

pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Int4
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::Int8
	}
}

impl GetType for OrderedF32 {
	fn get_type() -> Type {
		Type::Float4
	}
}

impl GetType for OrderedF64 {
	fn get_type() -> Type {
		Type::Float8
	}
}

impl GetType for String {
	fn get_type() -> Type {
		Type::Utf8
	}
}
