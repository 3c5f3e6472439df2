// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_types;
pub mod decl_macros;
pub mod termglow_error;

// Re-export.
pub use common_types::*;
pub use termglow_error::*;
