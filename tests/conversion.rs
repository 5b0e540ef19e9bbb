use std::fs;

use radixa::{
    ConversionError, ConversionStep, Radix, convert, convert_str,
    converter::{from_decimal::from_decimal, to_decimal::to_decimal, validator::is_valid},
    error::RadixRole,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, case) in extract_cases(&content) {
            count += 1;
            let outcome = convert_str(&case.numeral, &case.from, &case.to);
            match (&case.expected, outcome) {
                (Some(expected), Ok(result)) => {
                    assert_eq!(result.final_value(),
                               expected,
                               "Case on line {line_number} in {path:?} converted wrongly");
                },
                (None, Err(_)) => {},
                (Some(_), Err(e)) => {
                    panic!("Case on line {line_number} in {path:?} failed:\n{e}")
                },
                (None, Ok(result)) => panic!("Case on line {line_number} in {path:?} succeeded \
                                              with {} but was expected to fail",
                                             result.final_value()),
            }
        }
    }

    assert!(count > 0, "No conversion cases found in tests/cases");
}

struct Case {
    numeral:  String,
    from:     String,
    to:       String,
    expected: Option<String>,
}

fn extract_cases(content: &str) -> Vec<(usize, Case)> {
    let mut cases = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (inputs, expected) =
            trimmed.split_once("=>")
                   .unwrap_or_else(|| panic!("Line {} has no `=>`: {trimmed}", index + 1));
        let inputs: Vec<&str> = inputs.split_whitespace().collect();
        assert_eq!(inputs.len(), 3, "Line {} needs a numeral and two bases", index + 1);

        let expected = expected.trim();
        cases.push((index + 1,
                    Case { numeral:  inputs[0].to_string(),
                           from:     inputs[1].to_string(),
                           to:       inputs[2].to_string(),
                           expected: (expected != "error").then(|| expected.to_string()), }));
    }

    cases
}

fn assert_converts(numeral: &str, from: i64, to: i64, expected: &str) {
    match convert(numeral, from, to) {
        Ok(result) => assert_eq!(result.final_value(), expected),
        Err(e) => panic!("Conversion of {numeral} failed: {e}"),
    }
}

fn radix(value: u32) -> Radix {
    Radix::new(value).expect("radix in range")
}

#[test]
fn validator_checks_alphabet() {
    assert!(!is_valid("G", radix(16)));
    assert!(is_valid("F", radix(16)));
    assert!(is_valid("Z", radix(36)));
    assert!(!is_valid("Z", radix(35)));
    assert!(is_valid("z", radix(36)));
    assert!(!is_valid("2", radix(2)));
}

#[test]
fn validator_allows_one_separator() {
    assert!(!is_valid("1.2.3", radix(10)));
    assert!(!is_valid("1,2.3", radix(10)));
    assert!(is_valid("1,5", radix(10)));
    assert!(is_valid("1.", radix(10)));
}

#[test]
fn validator_accepts_empty_string_for_every_radix() {
    for value in Radix::MIN..=Radix::MAX {
        assert!(is_valid("", radix(value)), "empty string rejected in base {value}");
    }
}

#[test]
fn validator_only_accepts_leading_sign() {
    assert!(is_valid("-101", radix(2)));
    assert!(is_valid("+101", radix(2)));
    assert!(!is_valid("1-01", radix(2)));
    assert!(!is_valid("--1", radix(2)));
    assert!(!is_valid("+-1", radix(2)));
    assert!(!is_valid(" 1", radix(2)));
}

#[test]
fn basic_conversions() {
    assert_converts("FF", 16, 10, "255");
    assert_converts("255", 10, 16, "FF");
    assert_converts("1010", 2, 10, "10");
}

#[test]
fn zero_converts_to_zero_for_all_radices() {
    for from in 2..=36 {
        for to in 2..=36 {
            assert_converts("0", from, to, "0");
        }
    }
}

#[test]
fn input_is_trimmed_and_case_insensitive() {
    assert_converts("  ff  ", 16, 10, "255");
    assert_converts("abc", 16, 10, "2748");
    assert_converts("ABC", 16, 10, "2748");
}

#[test]
fn comma_is_a_decimal_point() {
    assert_converts("0,8", 16, 10, "0.5");
    assert_converts("2,5", 10, 2, "10.1");
}

#[test]
fn signed_numerals_convert_in_any_radix() {
    assert_converts("-FF", 16, 10, "-255");
    assert_converts("-FF", 16, 2, "-11111111");
    assert_converts("+FF", 16, 8, "377");
}

#[test]
fn fraction_terminates_before_cap() {
    let result = convert("0.5", 10, 2).unwrap();
    assert_eq!(result.final_value(), "0.1");

    let ConversionStep::RepeatedDivision(step) = &result.steps()[1] else {
        panic!("expected a repeated division step");
    };
    assert_eq!(step.multiplications().len(), 1);
}

#[test]
fn fraction_is_capped_at_ten_digits() {
    let result = convert("0.1", 10, 2).unwrap();
    let (_, fraction) = result.final_value().split_once('.').unwrap();
    assert_eq!(fraction.len(), 10);

    let result = convert("0.1", 10, 3).unwrap();
    let (_, fraction) = result.final_value().split_once('.').unwrap();
    assert_eq!(fraction.len(), 10);
}

#[test]
fn empty_input_is_error() {
    assert_eq!(convert("", 10, 2).unwrap_err(), ConversionError::EmptyInput);
    assert_eq!(convert("   ", 10, 2).unwrap_err(), ConversionError::EmptyInput);
}

#[test]
fn empty_input_is_reported_before_radix() {
    assert_eq!(convert("", 1, 99).unwrap_err(), ConversionError::EmptyInput);
}

#[test]
fn invalid_radix_names_its_role() {
    let err = convert("10", 1, 10).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidRadix { role: RadixRole::Source, .. }));
    assert_eq!(err.to_string(), "Source base must be between 2 and 36");

    let err = convert("10", 10, 37).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidRadix { role: RadixRole::Target, .. }));
    assert_eq!(err.to_string(), "Target base must be between 2 and 36");

    let err = convert_str("10", "ten", "2").unwrap_err();
    assert!(matches!(err, ConversionError::InvalidRadix { role: RadixRole::Source, .. }));

    let err = convert_str("10", "2", "").unwrap_err();
    assert!(matches!(err, ConversionError::InvalidRadix { role: RadixRole::Target, .. }));
}

#[test]
fn invalid_numeral_is_error() {
    let err = convert("A", 10, 10).unwrap_err();
    assert_eq!(err,
               ConversionError::InvalidNumeralForRadix { numeral: "A".to_string(),
                                                         radix:   10, });
    assert_eq!(err.to_string(), "\"A\" is not a valid number in base 10");
}

#[test]
fn numeral_without_digits_is_error() {
    for numeral in [".", ",", "-", "+", "-."] {
        let err = convert(numeral, 16, 2).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidNumeralForRadix { .. }),
                "{numeral} should be rejected");
    }
}

#[test]
fn overflowing_numeral_is_error() {
    let err = convert(&"Z".repeat(300), 36, 2).unwrap_err();
    assert!(matches!(err, ConversionError::ConversionFailed { .. }));

    let err = convert(&"9".repeat(400), 10, 2).unwrap_err();
    assert!(matches!(err, ConversionError::ConversionFailed { .. }));
}

#[test]
fn non_finite_decimal_is_error() {
    for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        for base in [2, 10, 36] {
            let err = from_decimal(value, radix(base)).unwrap_err();
            assert!(matches!(err, ConversionError::ConversionFailed { .. }),
                    "{value} in base {base} should fail, got {err:?}");
        }
    }
}

#[test]
fn leading_zeros_beyond_float_range_contribute_nothing() {
    let numeral = format!("{}1", "0".repeat(1100));
    assert_converts(&numeral, 2, 10, "1");

    let numeral = format!("{}1", "0".repeat(250));
    assert_converts(&numeral, 36, 10, "1");

    let (value, step) = to_decimal(&format!("{}1", "0".repeat(1100)), radix(2)).unwrap();
    assert_eq!(value, 1.0);
    let ConversionStep::DigitExpansion(step) = step else {
        panic!("expected a digit expansion step");
    };
    assert_eq!(step.digits().len(), 1101);
    assert_eq!(step.digits()[0].exponent, 1100);
    assert_eq!(step.digits()[0].contribution, 0.0);
}

#[test]
fn non_ascii_letters_are_not_folded() {
    assert!(!is_valid("ß", radix(36)));
    let err = convert("ß", 36, 10).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidNumeralForRadix { radix: 36, .. }));

    let err = convert("ǆ", 36, 10).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidNumeralForRadix { .. }));
}

#[test]
fn convert_traces_the_same_expansion_as_to_decimal() {
    let result = convert("-1f,8", 16, 2).unwrap();
    let (value, step) = to_decimal("-1F,8", radix(16)).unwrap();

    assert_eq!(value, -31.5);
    assert_eq!(result.steps()[0], step);
    assert_eq!(result.final_value(), "-11111.1");
}

#[test]
fn decimal_to_decimal_has_two_direct_steps() {
    let result = convert("12,5", 10, 10).unwrap();
    assert_eq!(result.final_value(), "12.5");
    assert_eq!(result.steps().len(), 2);
    assert!(result.steps().iter().all(|step| matches!(step, ConversionStep::Direct(_))));
    assert_eq!(result.steps()[0].title(), "Input is already in decimal");
    assert_eq!(result.steps()[1].title(), "Target base is decimal");
    assert_eq!(result.steps()[1].description(), "The decimal value is 12.5.");
}

#[test]
fn digit_expansion_records_every_digit() {
    let result = convert("FF.8", 16, 10).unwrap();
    assert_eq!(result.final_value(), "255.5");

    let ConversionStep::DigitExpansion(step) = &result.steps()[0] else {
        panic!("expected a digit expansion step");
    };
    assert_eq!(step.radix().get(), 16);
    assert_eq!(step.value(), 255.5);

    let exponents: Vec<i32> = step.digits().iter().map(|record| record.exponent).collect();
    assert_eq!(exponents, [1, 0, -1]);

    let contributions: Vec<f64> = step.digits().iter().map(|record| record.contribution).collect();
    assert_eq!(contributions, [240.0, 15.0, 0.5]);

    assert_eq!(result.steps()[0].title(), "Step 1: Convert from base 16 to decimal");
    assert_eq!(result.steps()[0].formula(),
               Some("(F × 16^1) + (F × 16^0) + (8 × 16^-1)"));
}

#[test]
fn negative_numeral_wraps_formula() {
    let result = convert("-11", 2, 10).unwrap();
    assert_eq!(result.final_value(), "-3");
    assert_eq!(result.steps()[0].formula(), Some("-((1 × 2^1) + (1 × 2^0))"));
}

#[test]
fn division_records_read_bottom_to_top() {
    let result = convert("10", 10, 2).unwrap();

    let ConversionStep::RepeatedDivision(step) = &result.steps()[1] else {
        panic!("expected a repeated division step");
    };
    let remainders: Vec<u32> = step.divisions().iter().map(|record| record.remainder).collect();
    assert_eq!(remainders, [0, 1, 0, 1]);

    let dividends: Vec<f64> = step.divisions().iter().map(|record| record.dividend).collect();
    assert_eq!(dividends, [10.0, 5.0, 2.0, 1.0]);

    let spelled: String = step.divisions().iter().rev().map(|record| record.digit).collect();
    assert_eq!(spelled, result.final_value());
    assert!(step.multiplications().is_empty());
}

#[test]
fn zero_target_step_has_no_records() {
    let result = convert("0", 10, 2).unwrap();
    let step = &result.steps()[1];
    assert!(matches!(step, ConversionStep::Direct(_)));
    assert_eq!(step.title(), "Step 2: Convert from decimal to base 2");
    assert_eq!(step.description(), "The decimal value is 0.");
    assert_eq!(step.result(), "0");
}

#[test]
fn trace_renders_as_text() {
    let result = convert("FF", 16, 2).unwrap();
    let text = result.to_string();

    assert!(text.contains("Step 1: Convert from base 16 to decimal"));
    assert!(text.contains("15 × 16^1 = 240"));
    assert!(text.contains("Sum = 255"));
    assert!(text.contains("Step 2: Convert from decimal (255) to base 2"));
    assert!(text.contains("Integer part conversion:"));
    assert!(text.contains("255 ÷ 2 = 127 remainder 1 (digit: 1)"));
    assert!(text.contains("Result = 11111111"));
}

#[test]
fn fraction_trace_renders_multiplications() {
    let result = convert("0.75", 10, 2).unwrap();
    let text = result.to_string();

    assert!(text.contains("Fractional part conversion:"));
    assert!(text.contains("0.7500000000 × 2 = 1.5000000000 → integer part: 1 (digit: 1)"));
    assert!(text.contains("Result = 0.11"));
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_to_json() {
    let result = convert("A", 16, 2).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["final_value"], "1010");
    assert_eq!(json["steps"][0]["kind"], "digit_expansion");
    assert_eq!(json["steps"][0]["radix"], 16);
    assert_eq!(json["steps"][1]["kind"], "repeated_division");
    assert_eq!(json["steps"][1]["divisions"].as_array().map(Vec::len), Some(4));
}
