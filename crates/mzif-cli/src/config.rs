pub mod defaults;
pub mod models;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use defaults::DefaultsConfig;
use models::{AppConfig, Mode};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialProgressConfig {
    enabled: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialShowConfig {
    #[serde(rename = "list-models")]
    list_models: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    overwrite: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    progress: Option<PartialProgressConfig>,
    show: Option<PartialShowConfig>,
    output: Option<PartialOutputConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final configuration. Precedence, highest first: dedicated
    /// CLI flags, `--set` overrides, the config file, built-in defaults.
    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<AppConfig> {
        self.apply_set_values(&cli.set_values)?;
        let defaults = DefaultsConfig::default();

        let mode = Self::resolve_mode(cli)?;

        match (mode, &cli.output) {
            (Mode::Split { .. }, None) => {
                return Err(CliError::Argument(
                    "--split requires an output container (-o PATH).".to_string(),
                ));
            }
            (Mode::Show, Some(path)) => {
                warn!("Ignoring output path {:?} in --show mode.", path);
            }
            _ => {}
        }

        let progress_enabled = !cli.no_progress
            && self
                .progress
                .and_then(|p| p.enabled)
                .unwrap_or(defaults.progress_enabled);
        let list_models = self
            .show
            .and_then(|s| s.list_models)
            .unwrap_or(defaults.list_models);
        let overwrite = self
            .output
            .and_then(|o| o.overwrite)
            .unwrap_or(defaults.overwrite);

        let output = match mode {
            Mode::Show => None,
            _ => cli.output.clone(),
        };

        if let Some(path) = &output {
            if !overwrite && path.exists() {
                return Err(CliError::Config(format!(
                    "Output file {:?} already exists and `output.overwrite` is false.",
                    path
                )));
            }
        }

        Ok(AppConfig {
            input: cli.file.clone(),
            output,
            mode,
            progress_enabled,
            list_models,
        })
    }

    fn resolve_mode(cli: &Cli) -> Result<Mode> {
        if cli.show {
            return Ok(Mode::Show);
        }
        match cli.split {
            Some(threshold) if threshold.is_nan() => Err(CliError::Argument(
                "--split threshold must be a number, got NaN.".to_string(),
            )),
            Some(threshold) => Ok(Mode::Split { threshold }),
            None => Ok(Mode::Convert),
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) =
                parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
            let value = parser::parse_bool(key, value_str)
                .map_err(|e| CliError::Config(e.to_string()))?;

            match key {
                "progress.enabled" => {
                    self.progress.get_or_insert_with(Default::default).enabled = Some(value);
                }
                "show.list-models" => {
                    self.show.get_or_insert_with(Default::default).list_models = Some(value);
                }
                "output.overwrite" => {
                    self.output.get_or_insert_with(Default::default).overwrite = Some(value);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["mzif2bin"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&parse(&["ensemble.dat", "-o", "out.bin"]))
            .unwrap();

        assert_eq!(config.mode, Mode::Convert);
        assert_eq!(config.input, PathBuf::from("ensemble.dat"));
        assert_eq!(config.output, Some(PathBuf::from("out.bin")));
        assert!(config.progress_enabled);
        assert!(config.list_models);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mzif.toml");
        fs::write(
            &path,
            r#"
            [progress]
            enabled = false

            [show]
            list-models = false
            "#,
        )
        .unwrap();

        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&parse(&["--show", "raw.bin"]))
            .unwrap();

        assert_eq!(config.mode, Mode::Show);
        assert!(!config.progress_enabled);
        assert!(!config.list_models);
    }

    #[test]
    fn set_values_override_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mzif.toml");
        fs::write(&path, "[show]\nlist-models = false\n").unwrap();

        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&parse(&["--show", "raw.bin", "-S", "show.list-models=true"]))
            .unwrap();

        assert!(config.list_models);
    }

    #[test]
    fn no_progress_flag_wins_over_everything() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&parse(&[
                "ensemble.dat",
                "--no-progress",
                "-S",
                "progress.enabled=true",
            ]))
            .unwrap();
        assert!(!config.progress_enabled);
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[progress]\ncolour = true\n").unwrap();

        let result = PartialAppConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialAppConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn bad_set_values_are_config_errors() {
        for bad in ["progress.enabled", "progress.enabled=maybe", "split.threshold=1"] {
            let result =
                PartialAppConfig::default().merge_with_cli(&parse(&["ensemble.dat", "-S", bad]));
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "expected config error for {bad}"
            );
        }
    }

    #[test]
    fn split_requires_an_output_path() {
        let result =
            PartialAppConfig::default().merge_with_cli(&parse(&["--split", "2.0", "raw.bin"]));
        assert!(matches!(result, Err(CliError::Argument(_))));

        let config = PartialAppConfig::default()
            .merge_with_cli(&parse(&["--split", "2.0", "raw.bin", "-o", "split.bin"]))
            .unwrap();
        assert_eq!(config.mode, Mode::Split { threshold: 2.0 });
    }

    #[test]
    fn nan_split_threshold_is_rejected() {
        let result = PartialAppConfig::default()
            .merge_with_cli(&parse(&["--split", "NaN", "raw.bin", "-o", "split.bin"]));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn show_mode_drops_the_output_path() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&parse(&["--show", "raw.bin", "-o", "ignored.bin"]))
            .unwrap();
        assert!(config.output.is_none());
    }

    #[test]
    fn existing_output_is_protected_when_overwrite_is_off() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("out.bin");
        fs::write(&existing, b"old").unwrap();
        let existing = existing.to_str().unwrap();

        let result = PartialAppConfig::default().merge_with_cli(&parse(&[
            "ensemble.dat",
            "-o",
            existing,
            "-S",
            "output.overwrite=false",
        ]));
        assert!(matches!(result, Err(CliError::Config(_))));

        let config = PartialAppConfig::default()
            .merge_with_cli(&parse(&["ensemble.dat", "-o", existing]))
            .unwrap();
        assert_eq!(config.output, Some(PathBuf::from(existing)));
    }
}
