//! Test utilities for building worlds, obstacles, and input scripts.
//!
//! This module provides helpers for creating test fixtures in a fluent manner.
