use clap::Parser;
use radixa::{ConversionResult, convert_str};
use tracing_subscriber::EnvFilter;

/// radixa converts a number between bases 2 to 36 and shows every step of
/// the conversion.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base the number is written in.
    #[arg(short, long, default_value = "10")]
    from: String,

    /// The base to convert the number into.
    #[arg(short, long, default_value = "10")]
    to: String,

    /// Only print the converted number, without the steps.
    #[arg(short, long)]
    quiet: bool,

    /// Print the result and its steps as JSON.
    #[arg(short, long, conflicts_with = "quiet")]
    json: bool,

    /// Log what the converter is doing to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The number to convert, e.g. `FF`, `-101.1` or `3,14`.
    #[arg(allow_hyphen_values = true)]
    number: String,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let output = run(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    println!("{output}");
}

/// Converts the number named on the command line and renders the outcome.
///
/// Any error, from the conversion or from rendering, ends the process with
/// status 1.
fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let result = convert_str(&args.number, &args.from, &args.to)?;
    render(&result, args)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn render(result: &ConversionResult, args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    if args.json {
        return render_json(result);
    }
    if args.quiet {
        return Ok(result.final_value().to_string());
    }
    Ok(format!("Result: {}\n\n{result}", result.final_value()))
}

#[cfg(feature = "serde")]
fn render_json(result: &ConversionResult) -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(not(feature = "serde"))]
fn render_json(_result: &ConversionResult) -> Result<String, Box<dyn std::error::Error>> {
    Err("radixa was built without the `serde` feature; JSON output is unavailable".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(arguments: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let args = Args::try_parse_from(std::iter::once("radixa").chain(arguments.iter().copied()))?;
        run(&args)
    }

    #[test]
    fn quiet_prints_only_the_result() {
        let output = run_with(&["-q", "--from", "16", "--to", "2", "ff"]).unwrap();
        assert_eq!(output, "11111111");
    }

    #[test]
    fn default_output_has_result_and_steps() {
        let output = run_with(&["-f", "2", "1010"]).unwrap();
        assert!(output.starts_with("Result: 10\n\n"));
        assert!(output.contains("Step 1: Convert from base 2 to decimal"));
        assert!(output.contains("Target base is decimal"));
    }

    #[test]
    fn negative_number_is_not_a_flag() {
        let output = run_with(&["-q", "-t", "2", "-5"]).unwrap();
        assert_eq!(output, "-101");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_prints_the_whole_result() {
        let output = run_with(&["-j", "-f", "16", "-t", "10", "A"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["final_value"], "10");
        assert_eq!(json["steps"][0]["kind"], "digit_expansion");
        assert_eq!(json["steps"][1]["kind"], "direct");
    }

    #[test]
    fn quiet_and_json_conflict() {
        assert!(Args::try_parse_from(["radixa", "-q", "-j", "1"]).is_err());
    }

    #[test]
    fn conversion_error_is_reported() {
        let err = run_with(&["-f", "16", "G"]).unwrap_err();
        assert_eq!(err.to_string(), "\"G\" is not a valid number in base 16");

        let err = run_with(&["-t", "37", "1"]).unwrap_err();
        assert_eq!(err.to_string(), "Target base must be between 2 and 36");
    }
}
