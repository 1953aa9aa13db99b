//! Shared utilities for the giorgi units library

pub mod error;
