//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - 2D math types and helpers
//! - Frame and wall-clock time
//! - Logging setup

pub mod math;
pub mod time;
pub mod logging;
