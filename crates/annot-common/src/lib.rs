//! Common types and utilities for the annot resolver.
//!
//! This crate provides the data shapes shared by every annot crate:
//! - Parameter sets (`ParameterSet`, `ParamGroup`, `ParamValue`)
//! - Value kinds used in conflict reporting (`ValueKind`)
//! - Resolver limits and thresholds

// Parameter sets - the parsed form of one declaration's annotations
pub mod params;
pub use params::{ParamGroup, ParamValue, ParameterSet, ValueKind};

// Centralized limits and thresholds
pub mod limits;
