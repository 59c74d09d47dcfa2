pub mod map;

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use ipmapper_common::config::{
    Config, DEFAULT_BOUNDARIES_PATH, DEFAULT_DATABASE_PATH, DEFAULT_OUTPUT_PATH, MalformedPolicy,
    RenderStyle,
};

pub const USAGE: &str = "Usage: ipmapper <ip-list-file>";

#[derive(Parser, Debug)]
#[command(name = "ipmapper", version)]
#[command(about = "Plot IP addresses on a world map using an offline geolocation database.")]
pub struct CommandLine {
    /// File with IP addresses separated by whitespace or newlines
    pub input: PathBuf,

    /// MaxMind City database (.mmdb)
    #[arg(long, env = "IPMAPPER_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// GeoJSON FeatureCollection with country polygons
    #[arg(long, env = "IPMAPPER_BOUNDARIES", default_value = DEFAULT_BOUNDARIES_PATH)]
    pub boundaries: PathBuf,

    /// Where to write the PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Abort on the first token that is not an IP address instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Less output (-q hides headers and progress, -qq prints errors only)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    /// Parses `std::env::args`. A missing input file prints the one-line usage
    /// and exits with status 1; every other parse error is left to clap.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(commands) => commands,
            Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
                eprintln!("{USAGE}");
                process::exit(1);
            }
            Err(err) => err.exit(),
        }
    }

    pub fn to_config(&self) -> Config {
        Config {
            database: self.database.clone(),
            boundaries: self.boundaries.clone(),
            output: self.output.clone(),
            malformed: if self.strict {
                MalformedPolicy::Abort
            } else {
                MalformedPolicy::Skip
            },
            quiet: self.quiet,
            style: RenderStyle::default(),
        }
    }
}
