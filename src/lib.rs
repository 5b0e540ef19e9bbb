//! # radixa
//!
//! radixa converts numerals between positional numeral systems with radix 2
//! to 36 and explains how it got there. Every conversion returns the
//! converted numeral together with a step trace: the digit-by-digit
//! expansion into decimal, then the repeated division and multiplication
//! back out of it.
//!
//! ```
//! use radixa::convert;
//!
//! let result = convert("1010.1", 2, 16).unwrap();
//! assert_eq!(result.final_value(), "A.8");
//!
//! for step in result.steps() {
//!     println!("{step}\n");
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Performs the conversions and records their steps.
///
/// This module ties together numeral lexing, validation, the two conversion
/// directions, and the step trace data model. It exposes the entry points
/// used by any presentation layer.
///
/// # Responsibilities
/// - Validates numerals against the digit alphabet of a radix.
/// - Converts between any radix and decimal in both directions.
/// - Records each stage as an immutable `ConversionStep`.
pub mod converter;
/// Provides the error type for validation and conversion.
///
/// Every failure is reported as a `ConversionError` carrying a human readable
/// message. There is no partial result and no recovery path: the caller
/// re-prompts.
pub mod error;
/// General utilities for safe numeric conversion and number formatting.
///
/// # Responsibilities
/// - Safely convert `f64` results of the arithmetic back into digit values.
/// - Format numbers the way step traces show them.
pub mod util;

pub use converter::{
    core::{ConversionResult, convert, convert_between, convert_str},
    radix::Radix,
    step::ConversionStep,
};
pub use error::ConversionError;
