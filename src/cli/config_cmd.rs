//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

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
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "input_dir" => config.input_dir = Some(value.to_string()),
        "label_dir" => config.label_dir = Some(value.to_string()),
        "export_filename" => config.export_filename = Some(value.to_string()),
        "sil_lev" => config.sil_lev = Some(parse_u32(key, value)?),
        "sil_dur" => config.sil_dur = Some(parse_u32(key, value)?),
        "export_timeout_secs" => config.export_timeout_secs = Some(parse_u64(key, value)?),
        "response_timeout_secs" => config.response_timeout_secs = Some(parse_u64(key, value)?),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;
    let value = match key {
        "input_dir" => config.input_dir,
        "label_dir" => config.label_dir,
        "export_filename" => config.export_filename,
        "sil_lev" => config.sil_lev.map(|v| v.to_string()),
        "sil_dur" => config.sil_dur.map(|v| v.to_string()),
        "export_timeout_secs" => config.export_timeout_secs.map(|v| v.to_string()),
        "response_timeout_secs" => config.response_timeout_secs.map(|v| v.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.info(&format!("{} is not set", key)),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    let unset = "(unset)".to_string();

    presenter.key_value("input_dir", config.input_dir.as_ref().unwrap_or(&unset));
    presenter.key_value("label_dir", config.label_dir.as_ref().unwrap_or(&unset));
    presenter.key_value(
        "export_filename",
        config.export_filename.as_ref().unwrap_or(&unset),
    );
    presenter.key_value(
        "sil_lev",
        &config.sil_lev.map_or_else(|| unset.clone(), |v| v.to_string()),
    );
    presenter.key_value(
        "sil_dur",
        &config.sil_dur.map_or_else(|| unset.clone(), |v| v.to_string()),
    );
    presenter.key_value(
        "export_timeout_secs",
        &config
            .export_timeout_secs
            .map_or_else(|| unset.clone(), |v| v.to_string()),
    );
    presenter.key_value(
        "response_timeout_secs",
        &config
            .response_timeout_secs
            .map_or_else(|| unset.clone(), |v| v.to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be a non-negative integer".to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be a non-negative integer (seconds)".to_string(),
    })
}
