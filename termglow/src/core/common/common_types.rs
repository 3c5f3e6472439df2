// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use smallvec::SmallVec;

pub type StdMutex<T> = std::sync::Mutex<T>;

/// Default stack storage size for [`InlineString`]. Labels and color names are short,
/// so this avoids a heap allocation in the common case.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Default stack storage size for [`InlineVec`].
pub const DEFAULT_VEC_STORAGE_SIZE: usize = 8;

pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

pub type InlineVec<T> = SmallVec<[T; DEFAULT_VEC_STORAGE_SIZE]>;
