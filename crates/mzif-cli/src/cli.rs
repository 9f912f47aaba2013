use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Jonathan Coles",
    version,
    about = "mzif2bin - Pack model-ensemble text into binary containers, split and inspect them.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Input file: ensemble text when converting, a container with --show or --split.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path for the output container.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a summary of a container instead of converting.
    #[arg(long, conflicts_with = "split")]
    pub show: bool,

    /// Split a raw container into native (RMSD below the threshold) and decoy models.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub split: Option<f64>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Hide the progress bar, overriding the config file.
    #[arg(long)]
    pub no_progress: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S show.list-models=false
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_mode_needs_only_the_input() {
        let cli = Cli::try_parse_from(["mzif2bin", "in.dat"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("in.dat"));
        assert!(cli.output.is_none());
        assert!(!cli.show);
        assert!(cli.split.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbosity_is_a_counter() {
        let cli = Cli::try_parse_from(["mzif2bin", "-vvv", "in.dat", "-o", "out.bin"]).unwrap();
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.output, Some(PathBuf::from("out.bin")));
    }

    #[test]
    fn split_takes_a_float() {
        let cli = Cli::try_parse_from(["mzif2bin", "--split", "2.5", "raw.bin", "-o", "s.bin"])
            .unwrap();
        assert_eq!(cli.split, Some(2.5));

        assert!(Cli::try_parse_from(["mzif2bin", "--split", "wide", "raw.bin"]).is_err());
    }

    #[test]
    fn show_and_split_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["mzif2bin", "--show", "--split", "2.0", "raw.bin"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mzif2bin", "-q", "-v", "in.dat"]).is_err());
    }

    #[test]
    fn set_values_accumulate() {
        let cli = Cli::try_parse_from([
            "mzif2bin",
            "in.dat",
            "-S",
            "progress.enabled=false",
            "--set",
            "output.overwrite=false",
        ])
        .unwrap();
        assert_eq!(
            cli.set_values,
            vec!["progress.enabled=false", "output.overwrite=false"]
        );
    }
}
