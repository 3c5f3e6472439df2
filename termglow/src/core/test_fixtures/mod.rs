// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for testing code that renders to a terminal, without a terminal. These are
//! public so that integration tests (and downstream crates) can use them too.

// Attach sources.
pub mod failing_writer;
pub mod mock_env;
pub mod mock_terminal_probe;
pub mod output_device_ext;
pub mod stdout_mock;

// Re-export.
pub use failing_writer::*;
pub use mock_env::*;
pub use mock_terminal_probe::*;
pub use output_device_ext::*;
pub use stdout_mock::*;
