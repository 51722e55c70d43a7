use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::*;
use tracker_cat::FrameParser;
use tracker_frame::Profile;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ProfileArg {
    /// Scaled values, typed external sensors, counted beacon scans.
    Rich,
    /// Raw values and a single beacon.
    Compact,
}

impl From<ProfileArg> for Profile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Rich => Profile::Rich,
            ProfileArg::Compact => Profile::Compact,
        }
    }
}

/// `cat` for tracker uplink frames.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The device profile that produced the frame.
    #[arg(short, long, value_enum, default_value_t = ProfileArg::Rich)]
    profile: ProfileArg,
    /// The uplink frame to parse, as hex. Whitespace is ignored.
    #[clap(value_parser(clap::builder::NonEmptyStringValueParser::new()))]
    input: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match FrameParser::parse_hex(&args.input, args.profile.into()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {err}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}
