//! Shared utilities for Vitae
//!
//! Configuration loading, error types, logging setup and the rate limiters
//! used for scroll and resize input.

pub mod config;
pub mod error;
pub mod logger;
pub mod rate_limit;

// Available exports via submodules:
// config::{Config, SectionKind, Features, ThemeTokens}
// error::{VitaeError, VitaeResult, ResultExt}
// logger::{init_global_logger, is_debug_enabled}
