// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use super::StdoutMock;
use crate::{FailingWriter, OutputDevice, StdMutex};

pub trait OutputDeviceExt {
    /// An [`OutputDevice`] that writes into the returned [`StdoutMock`].
    fn new_mock() -> (OutputDevice, StdoutMock);

    /// An [`OutputDevice`] whose every write fails. The returned [`FailingWriter`]
    /// counts the attempts.
    fn new_failing() -> (OutputDevice, FailingWriter);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }

    fn new_failing() -> (OutputDevice, FailingWriter) {
        let failing_writer = FailingWriter::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(failing_writer.clone())),
            is_mock: true,
        };
        (this, failing_writer)
    }
}
