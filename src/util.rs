/// Numeric conversion and formatting helpers.
///
/// This module provides safe functions for turning the `f64` values produced
/// by the conversion arithmetic back into digit indices without silent data
/// loss, together with the two number formats used in step traces: the
/// shortest round-tripping form and a fixed ten-decimal form.
pub mod num;
