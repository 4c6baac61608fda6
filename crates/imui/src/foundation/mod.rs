//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the UI core:
//! - Integer vector and color types
//! - Frame timing
//! - Logging setup

pub mod math;
pub mod time;
pub mod logging;
