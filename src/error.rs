/// Conversion errors.
///
/// Defines every error that can be raised while validating input or
/// converting a numeral between radices. Errors carry enough detail to render
/// a human readable message for the user.
pub mod conversion_error;

pub use conversion_error::{ConversionError, RadixRole};
