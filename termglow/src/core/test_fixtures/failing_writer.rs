// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Error, ErrorKind, Result, Write},
          sync::{Arc,
                 atomic::{AtomicUsize, Ordering}}};

/// A writer that rejects every write with [`ErrorKind::BrokenPipe`], and counts how
/// many times it was asked to write.
#[derive(Clone, Default, Debug)]
pub struct FailingWriter {
    pub attempts: Arc<AtomicUsize>,
}

impl FailingWriter {
    pub fn attempt_count(&self) -> usize { self.attempts.load(Ordering::SeqCst) }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(Error::new(ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::new(ErrorKind::BrokenPipe, "sink closed"))
    }
}
