//! Headless risk assessment.
//!
//! Reads a JSON health profile and prints the assessment as JSON:
//!
//! ```bash
//! echo '{"age":54,...}' | cargo run --bin assess_profile
//! cargo run --bin assess_profile -- --input profile.json
//! ```
//!
//! Exit codes: 0 ok, 2 usage, 3 unreadable input, 4 empty or invalid profile JSON.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use heartcheck::{assess, HealthProfile, HeartcheckError};

const USAGE: &str = "Usage: assess_profile [--input <path>]";

const EXIT_USAGE: u8 = 2;
const EXIT_UNREADABLE: u8 = 3;
const EXIT_INVALID: u8 = 4;

fn read_input(path: Option<&PathBuf>) -> heartcheck::Result<String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text)
}

fn render(input: &str) -> heartcheck::Result<String> {
    if input.trim().is_empty() {
        return Err(HeartcheckError::Validation(
            "no profile given (empty input)".to_string(),
        ));
    }
    let profile: HealthProfile = serde_json::from_str(input)?;
    Ok(serde_json::to_string_pretty(&assess(&profile))?)
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let mut input_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let p = args.next().unwrap_or_default();
                if p.is_empty() {
                    eprintln!("{USAGE}");
                    return ExitCode::from(EXIT_USAGE);
                }
                input_path = Some(PathBuf::from(p));
            }
            "-h" | "--help" => {
                println!(
                    "{USAGE}\n\nReads a JSON health profile from <path> (or stdin) and prints the risk assessment as JSON. Fields: age, sex, chestPainType, restingBloodPressure, fastingBloodPressure, cholesterol, maxHeartRate, thalassemia, hasDiabetes, isSmoker, isObese."
                );
                return ExitCode::SUCCESS;
            }
            _ => {
                eprintln!("Unknown arg: {arg}\n{USAGE}");
                return ExitCode::from(EXIT_USAGE);
            }
        }
    }

    let input = match read_input(input_path.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Cannot read input: {e}");
            return ExitCode::from(EXIT_UNREADABLE);
        }
    };

    match render(&input) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(HeartcheckError::Serialization(e)) => {
            eprintln!("Invalid health profile: {e}");
            ExitCode::from(EXIT_INVALID)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_INVALID)
        }
    }
}
