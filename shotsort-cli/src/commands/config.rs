use std::io::{BufRead, IsTerminal, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shotsort_lib::{RunSettings, Settings};
use shotsort_lib::settings::{
    API_KEY_ENV, DIRECTORY_ENV, SettingsField, field_list, load_settings_from,
};

use crate::error::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(4).collect::<String>())
    }
}

/// Read one line from stdin, re-asking until it's non-empty.
///
/// With a default, an empty answer keeps the default.
fn read_line(prompt: &str, default: Option<&str>) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    loop {
        match default {
            Some(def) if !def.is_empty() => print!("  {} [{}]: ", prompt, def),
            _ => print!("  {}: ", prompt),
        }
        std::io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Err(CliError::config("stdin closed before settings were entered"));
        }
        let trimmed = input.trim();

        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        if let Some(def) = default.filter(|d| !d.is_empty()) {
            return Ok(def.to_string());
        }
        println!(
            "    {}",
            "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}

/// Ask for every setting still missing after overrides and save the answers.
///
/// Only the file layer is saved, so environment values and `--directory`
/// stay out of the settings file. Refuses when stdin isn't a terminal, so
/// unattended runs fail fast.
pub(crate) fn repair_settings(mut run: RunSettings) -> Result<Settings, CliError> {
    let missing = run.effective.missing_fields();
    if missing.is_empty() {
        return Ok(run.effective);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::config(format!(
            "Missing required settings: {}. Run 'shotsort config setup' or set {} / {}.",
            field_list(&missing),
            API_KEY_ENV,
            DIRECTORY_ENV,
        )));
    }

    run.fill_missing(|field| {
        if field == SettingsField::ApiKey {
            println!("Steam Web API key is missing (https://steamcommunity.com/dev/apikey).");
        } else {
            println!("No screenshot directory configured.");
        }
        read_line(field.name(), None)
    })?;

    let path = shotsort_lib::save_settings(&run.file)?;
    log::info!(
        "{} Settings saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(run.effective)
}

/// Show current settings and their sources.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    log::info!(
        "{}",
        "shotsort settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let Some(path) = shotsort_lib::settings_path() else {
        log::warn!(
            "  Settings file: {}",
            "could not determine path".if_supports_color(Stdout, |t| t.red()),
        );
        return Ok(());
    };
    let status = if path.exists() { "(exists)" } else { "(not found)" };
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status.if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");

    let from_file = load_settings_from(&path)?;
    let env = |var: &str| std::env::var(var).ok().filter(|v| !v.trim().is_empty());

    let fields = [
        (SettingsField::ApiKey, API_KEY_ENV, true),
        (SettingsField::Directory, DIRECTORY_ENV, false),
    ];
    for (field, var, secret) in fields {
        let name = field.name();
        let file_value = from_file.field(field);
        let (value, source) = match env(var) {
            Some(v) => (v, format!("(env ${var})")),
            None if !file_value.trim().is_empty() => {
                (file_value.to_string(), "(settings file)".to_string())
            }
            None => {
                log::info!(
                    "  {} {}",
                    format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                    "not set".if_supports_color(Stdout, |t| t.yellow()),
                );
                continue;
            }
        };
        let shown = if secret { mask_value(&value) } else { value };
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            shown,
            source.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Interactively set both settings, offering current values as defaults.
pub(crate) fn run_config_setup() -> Result<(), CliError> {
    println!(
        "{}",
        "shotsort setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    let path = shotsort_lib::settings_path().ok_or(shotsort_lib::SettingsError::NoConfigDir)?;
    let existing = load_settings_from(&path)?;

    let settings = Settings {
        api_key: read_line("Steam Web API key", Some(&existing.api_key))?,
        directory: read_line("Screenshot directory", Some(&existing.directory))?,
    };

    shotsort_lib::settings::save_settings_to(&path, &settings)?;
    println!();
    println!(
        "{} Settings saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = shotsort_lib::settings_path().ok_or(shotsort_lib::SettingsError::NoConfigDir)?;
    log::info!("{}", path.display());
    Ok(())
}
