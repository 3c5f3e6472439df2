// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use crate::EnvSource;

/// A fixed environment for color support detection tests. Unlike the real process
/// environment, this is not shared between tests, so they don't need to be serialized.
///
/// ```
/// use termglow::{EnvSource, MockEnv};
///
/// let env = MockEnv::new().with("TERM", "xterm-256color").with("CI", "true");
/// assert_eq!(env.var("TERM").as_deref(), Some("xterm-256color"));
/// assert!(env.is_ci());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MockEnv {
    fn var(&self, key: &str) -> Option<String> { self.vars.get(key).cloned() }
}
