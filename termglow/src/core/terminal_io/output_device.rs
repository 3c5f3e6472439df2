// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

use crate::StdMutex;

pub type SendRawTerminal = dyn std::io::Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// ```
/// use termglow::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// {
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// The sink that rendered lines are written to.
/// - It is safe to clone, all clones write to the same underlying writer.
/// - Writes from the spinner task and the caller are serialized by the inner mutex.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new_from_writer(std::io::stdout()) }

    #[must_use]
    pub fn new_stderr() -> Self { Self::new_from_writer(std::io::stderr()) }

    /// Wraps any writer, eg a file or an in-memory buffer.
    pub fn new_from_writer(writer: impl std::io::Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
            is_mock: false,
        }
    }

    /// Locks the output device for writing.
    ///
    /// A poisoned lock (another thread panicked while writing) is recovered rather than
    /// propagated, since a half written line is harmless.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Each call locks the device for the duration of that one write. This lets an
/// [`OutputDevice`] be handed to anything that wants a [`std::io::Write`], eg a tracing
/// layer.
impl std::io::Write for OutputDevice {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.lock().write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.lock().flush() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputDeviceExt;

    #[test]
    fn test_stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        assert!(!device.is_mock);
    }

    #[test]
    fn test_clones_share_the_writer() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let clone = device.clone();
        {
            let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
            mut_ref.write_all(b"one ").unwrap();
        }
        {
            let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(clone);
            mut_ref.write_all(b"two").unwrap();
        }
        assert!(device.is_mock);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "one two");
    }
}
