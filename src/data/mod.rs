//! Data loading and dataset implementations
//!
//! This module provides implementations of the Dataset trait for data
//! formats used by the command-line driver.

pub mod csv;

pub use self::csv::*;
