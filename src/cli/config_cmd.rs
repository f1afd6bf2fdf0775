//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::timing::Duration;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "base_url" => config.base_url = Some(value.to_string()),
        "initial_delay" => config.initial_delay = Some(value.to_string()),
        "poll_interval" => config.poll_interval = Some(value.to_string()),
        "deadline" => config.deadline = Some(value.to_string()),
        "retry_attempts" => config.retry_attempts = Some(parse_attempts(key, value)?),
        "retry_backoff" => config.retry_backoff = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    presenter.output(display_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, display_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Value of a key as shown to the user, with the API key masked
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "base_url" => config.base_url.clone(),
        "initial_delay" => config.initial_delay.clone(),
        "poll_interval" => config.poll_interval.clone(),
        "deadline" => config.deadline.clone(),
        "retry_attempts" => config.retry_attempts.map(|n| n.to_string()),
        "retry_backoff" => config.retry_backoff.clone(),
        _ => None,
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "initial_delay" | "poll_interval" | "deadline" | "retry_backoff" => {
            value
                .parse::<Duration>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "retry_attempts" => {
            parse_attempts(key, value)?;
        }
        "base_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!("Invalid value '{}'. Expected an http:// or https:// URL", value),
                });
            }
        }
        _ => {} // api_key accepts any string
    }
    Ok(())
}

fn parse_attempts(key: &str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be a whole number of at least 1".to_string(),
        }),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
