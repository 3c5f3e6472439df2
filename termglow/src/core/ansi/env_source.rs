// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::env;

/// Environment variables that indicate the process is running under CI.
pub const CI_ENV_VARS: [&str; 12] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "TRAVIS",
    "CIRCLECI",
    "BUILDKITE",
    "DRONE",
    "TEAMCITY_VERSION",
    "TF_BUILD",
    "JENKINS_URL",
    "APPVEYOR",
    "BITBUCKET_BUILD_NUMBER",
];

/// Read access to environment variables. Color support detection only ever looks at
/// the environment through this trait, so tests can inject a fixed environment instead
/// of mutating the real (process global) one.
pub trait EnvSource: Send + Sync {
    /// Value of the variable `key`, or [`None`] if it is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` if it is set to a non-empty string.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|it| !it.is_empty())
    }

    /// True if any of [`CI_ENV_VARS`] is set.
    fn is_ci(&self) -> bool { CI_ENV_VARS.iter().any(|key| self.var(key).is_some()) }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> { env::var(key).ok() }

    fn is_ci(&self) -> bool {
        is_ci::uncached() || CI_ENV_VARS.iter().any(|key| env::var_os(key).is_some())
    }
}
