// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig};
use crate::ok;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers, or [`None`] if logging is disabled. This does not initialize the
/// tracing system; use [`TracingConfig::install_global()`] or
/// [`TracingConfig::install_thread_local()`] for that.
///
/// # Errors
///
/// Returns an error if a layer can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    match try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        Some(layer) => return_it.push(layer),
        None => return Ok(None),
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the layer can't be created.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
            DisplayPreference::OutputDevice(output_device) => {
                let tracing_writer = move || output_device.clone();
                Some(Box::new(
                    fmt_layer
                        .with_ansi(false)
                        .with_writer(tracing_writer)
                        .with_filter(level_filter),
                ))
            }
        },
        WriterConfig::None => None,
    })
}

impl TracingConfig {
    /// Installs a process wide subscriber. This can only succeed once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn install_global(self) -> miette::Result<()> {
        match try_create_layers(self)? {
            Some(layers) => tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic(),
            None => ok!(),
        }
    }

    /// Installs a subscriber for the current thread only, until the returned guard is
    /// dropped. This is great for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the layers can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?.unwrap_or_default();
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

/// Logging is **disabled** by default. Pass anything that converts into a
/// [`TracingConfig`], eg a [`LevelFilter`] to log to stderr at that level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    it.install_global()
}

/// Like [`try_initialize_logging_global()`] but only for the current thread. Returns
/// [`None`] if logging is disabled.
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{ColorSupportDetector, MockEnv, MockTerminalProbe, OutputDevice,
                OutputDeviceExt, Stream};

    #[test]
    fn test_try_create_display_layer() {
        let writer_config = WriterConfig::Display(DisplayPreference::Stdout);
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, writer_config).unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_disabled_by_default() {
        assert!(try_create_layers(TracingConfig::default()).unwrap().is_none());
        assert!(
            try_initialize_logging_thread_local(LevelFilter::OFF)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_level_filter_layer_plus_display_layer() {
        let layers = try_create_layers(LevelFilter::INFO.into()).unwrap().unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_output_device_writer_captures_events() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let config = TracingConfig::new_display(DisplayPreference::OutputDevice(
            output_device,
        ))
        .with_level_filter(LevelFilter::INFO);
        let guard = config.install_thread_local().unwrap();

        tracing::error!("error");
        tracing::warn!("warn");
        tracing::info!("info");
        tracing::debug!("debug");

        drop(guard);

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("error"));
        assert!(output.contains("warn"));
        assert!(output.contains("info"));
        assert!(!output.contains("debug"));
    }

    #[test]
    fn test_detection_is_logged() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let guard = TracingConfig::new_display(DisplayPreference::OutputDevice(
            output_device,
        ))
        .install_thread_local()
        .unwrap();

        let detector = ColorSupportDetector::with_sources(
            Arc::new(MockEnv::new().with("TERM", "xterm-256color")),
            Arc::new(MockTerminalProbe::terminal()),
            Stream::Stdout,
        );
        let _ = detector.get_mode();

        drop(guard);

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("color support detected"));
        assert!(output.contains("Ansi256"));
        assert!(output.contains("Term256"));
    }
}
