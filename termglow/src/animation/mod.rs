// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Spinner and progress bar. Both share [`AnimationState`] and the frame renderers in
//! [`frame_render`]; they differ only in who drives the repaint:
//! - [`ProgressBar`] repaints synchronously from every mutator.
//! - [`Spinner`] repaints from a background tokio task on a fixed interval.

// Attach sources.
pub mod animation_config;
pub mod animation_state;
pub mod effects;
pub mod frame_render;
pub mod print;
pub mod progress_bar;
pub mod spinner;
pub mod spinner_constants;
pub mod theme;

// Re-export.
pub use animation_config::*;
pub use animation_state::*;
pub use effects::*;
pub use frame_render::*;
pub use print::*;
pub use progress_bar::*;
pub use spinner::*;
pub use spinner_constants::*;
pub use theme::*;
