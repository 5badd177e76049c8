use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_client::{ClientConfig, ConfigSource};

use crate::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(4).collect::<String>())
    }
}

/// Show the current settings and where each one came from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = pokedex_client::config_path();
    let sources = pokedex_client::config_sources();

    log::info!(
        "{}",
        "Pokedex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let config = ClientConfig::load()?;
    let fields: [(&str, &ConfigSource, Option<String>); 4] = [
        ("api_url", &sources.base_url, Some(config.base_url.clone())),
        ("token", &sources.token, config.bearer_token().map(mask_value)),
        ("page_size", &sources.page_size, Some(config.page_size.to_string())),
        (
            "timeout_secs",
            &sources.timeout_secs,
            config.timeout_secs.map(|s| s.to_string()),
        ),
    ];

    for (name, source, value) in fields {
        let source_str = format!("({})", source);
        let label = format!("{}:", name);
        match value {
            Some(v) => log::info!(
                "  {} {} {}",
                label.if_supports_color(Stdout, |t| t.cyan()),
                v,
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {} {} {}",
                label.if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }

    if config.bearer_token().is_none() {
        crate::log_blank();
        log::info!(
            "{}",
            "No token: you can browse the catalog, but box commands need one."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Store a bearer token in the config file. Prompts when `token` is `None`;
/// an empty token logs out.
pub(crate) fn run_config_set_token(token: Option<String>) -> Result<(), CliError> {
    let token = match token {
        Some(t) => t,
        None => {
            print!("  Bearer token (empty to log out): ");
            std::io::stdout().flush()?;
            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            input
        }
    };

    let token = token.trim();
    let token = (!token.is_empty()).then_some(token);

    let path = pokedex_client::set_file_token(token)
        .map_err(|e| CliError::config(format!("Failed to save config: {}", e)))?;

    if token.is_some() {
        log::info!(
            "{} Token saved to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    } else {
        log::info!(
            "{} Token removed from {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    if std::env::var("POKEDEX_TOKEN").is_ok() {
        log::warn!("POKEDEX_TOKEN is set and takes priority over the config file.");
    }
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match pokedex_client::config_path() {
        Some(path) => log::info!("{}", path.display()),
        None => {
            return Err(CliError::config("Could not determine config directory"));
        }
    }
    Ok(())
}
