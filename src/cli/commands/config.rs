//! Config command handler

use super::Console;
use crate::args::ConfigSubcommand;
use school_records::config::Config;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::Path;

/// Dispatch config subcommands against the user config file
///
/// # Errors
/// Returns an error for an unknown key, an invalid value, or a config file
/// that cannot be written or removed.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), Box<dyn Error>> {
    let config_file = Config::get_config_file_path();
    run_with(&mut Console::stdio(), subcommand, config, defaults, &config_file)
}

/// Dispatch config subcommands, persisting to `config_file`
///
/// # Errors
/// Same as [`run`].
pub fn run_with<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
    config_file: &Path,
) -> Result<(), Box<dyn Error>> {
    match subcommand {
        None => handle_config_get(console, config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(console, config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            handle_config_set(console, config, &key, &value, config_file)
        }
        Some(ConfigSubcommand::Unset { key }) => {
            handle_config_unset(console, config, defaults, &key, config_file)
        }
        Some(ConfigSubcommand::Reset) => handle_config_reset(console, config_file),
    }
}

fn handle_config_get<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
    key: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    if let Some(k) = key {
        let value = config
            .get(k)
            .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
        console.say(value)?;
    } else {
        console.say("\n=== Configuration ===\n")?;
        console.say(config.to_string().trim_end())?;
    }
    Ok(())
}

fn handle_config_set<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &mut Config,
    key: &str,
    value: &str,
    config_file: &Path,
) -> Result<(), Box<dyn Error>> {
    config.set(key, value)?;
    config
        .save_to(config_file)
        .map_err(|e| format!("Failed to save config: {e}"))?;
    console.say(format!("✓ Set {key} = {value}"))?;
    Ok(())
}

fn handle_config_unset<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &mut Config,
    defaults: &Config,
    key: &str,
    config_file: &Path,
) -> Result<(), Box<dyn Error>> {
    config.unset(key, defaults)?;
    config
        .save_to(config_file)
        .map_err(|e| format!("Failed to save config: {e}"))?;
    console.say(format!("✓ Reset {key} to default"))?;
    Ok(())
}

fn handle_config_reset<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config_file: &Path,
) -> Result<(), Box<dyn Error>> {
    if !config_file.exists() {
        console.say("✓ Config is already at defaults")?;
        return Ok(());
    }

    let answer = console.prompt("Are you sure you want to reset config to defaults? (y/n): ")?;
    let confirmed = answer.is_some_and(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"));
    if confirmed {
        Config::reset_at(config_file).map_err(|e| format!("Failed to remove config file: {e}"))?;
        console.say("✓ Config reset to defaults")?;
    } else {
        console.say("✗ Reset cancelled")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output, scripted};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, Config) {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("config").join("config.toml");
        (tmp, file, Config::from_defaults())
    }

    fn set(key: &str, value: &str) -> Option<ConfigSubcommand> {
        Some(ConfigSubcommand::Set {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    #[test]
    fn test_set_saves_and_confirms() {
        let (_tmp, file, mut config) = setup();
        let defaults = config.clone();
        let mut console = scripted("");

        run_with(&mut console, set("level", "debug"), &mut config, &defaults, &file).unwrap();

        assert_eq!(output(console), "✓ Set level = debug\n");
        assert_eq!(config.logging.level, "debug");
        let saved = Config::from_toml(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(saved.logging.level, "debug");
    }

    #[test]
    fn test_set_invalid_value_writes_nothing() {
        let (_tmp, file, mut config) = setup();
        let defaults = config.clone();
        let mut console = scripted("");

        let err = run_with(&mut console, set("verbose", "maybe"), &mut config, &defaults, &file)
            .unwrap_err();

        assert!(err.to_string().contains("verbose"));
        assert!(!file.exists());
        assert!(output(console).is_empty());
    }

    #[test]
    fn test_unset_restores_default() {
        let (_tmp, file, mut config) = setup();
        let defaults = config.clone();
        let mut console = scripted("");
        run_with(&mut console, set("reports_dir", "/tmp/elsewhere"), &mut config, &defaults, &file)
            .unwrap();

        let mut console = scripted("");
        let unset = Some(ConfigSubcommand::Unset {
            key: "reports_dir".to_string(),
        });
        run_with(&mut console, unset, &mut config, &defaults, &file).unwrap();

        assert_eq!(output(console), "✓ Reset reports_dir to default\n");
        assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
        let saved = Config::from_toml(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(saved.paths.reports_dir, defaults.paths.reports_dir);
    }

    #[test]
    fn test_get_unknown_key_is_an_error() {
        let (_tmp, file, mut config) = setup();
        let defaults = config.clone();
        let mut console = scripted("");
        let get = Some(ConfigSubcommand::Get {
            key: Some("colour".to_string()),
        });

        let err = run_with(&mut console, get, &mut config, &defaults, &file).unwrap_err();
        assert_eq!(err.to_string(), "Unknown config key: 'colour'");
    }

    #[test]
    fn test_show_all_lists_sections() {
        let (_tmp, file, mut config) = setup();
        let defaults = config.clone();
        let mut console = scripted("");

        run_with(&mut console, None, &mut config, &defaults, &file).unwrap();

        let out = output(console);
        assert!(out.starts_with("\n=== Configuration ===\n"));
        assert!(out.contains("[logging]"));
        assert!(out.contains("[paths]"));
    }

    #[test]
    fn test_reset_confirmed_removes_file() {
        let (_tmp, file, mut config) = setup();
        let defaults = config.clone();
        config.save_to(&file).unwrap();
        let mut console = scripted("yes\n");

        run_with(&mut console, Some(ConfigSubcommand::Reset), &mut config, &defaults, &file)
            .unwrap();

        assert!(output(console).ends_with("✓ Config reset to defaults\n"));
        assert!(!file.exists());
    }

    #[test]
    fn test_reset_declined_or_eof_keeps_file() {
        for script in ["n\n", ""] {
            let (_tmp, file, mut config) = setup();
            let defaults = config.clone();
            config.save_to(&file).unwrap();
            let mut console = scripted(script);

            run_with(&mut console, Some(ConfigSubcommand::Reset), &mut config, &defaults, &file)
                .unwrap();

            assert!(output(console).ends_with("✗ Reset cancelled\n"));
            assert!(file.exists());
        }
    }

    #[test]
    fn test_reset_without_file() {
        let (_tmp, file, mut config) = setup();
        let defaults = config.clone();
        let mut console = scripted("");

        run_with(&mut console, Some(ConfigSubcommand::Reset), &mut config, &defaults, &file)
            .unwrap();

        assert_eq!(output(console), "✓ Config is already at defaults\n");
    }
}
