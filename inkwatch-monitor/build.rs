//! Build script for inkwatch-monitor
//!
//! Validates monitor.toml at compile time. The same file is embedded as the
//! default configuration, so a broken file fails the build instead of the
//! first boot.

use std::fs;
use std::path::Path;

/// Must match `inkwatch_core::config::MAX_SERVERS`
const MAX_SERVERS: usize = 4;

/// Must match `inkwatch_core::config::MAX_KEY_LEN` / `MAX_LABEL_LEN`
const MAX_KEY_LEN: usize = 32;
const MAX_LABEL_LEN: usize = 24;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    validate_config();
}

/// Validate monitor.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=monitor.toml");

    let config_path = Path::new("monitor.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read monitor.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in monitor.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_polling(&config, &mut errors);
    validate_servers(&config, &mut errors);
    report("Invalid monitor configuration", &errors);

    println!("cargo:warning=monitor.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with all collected errors, if any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate poll interval and display mode
fn validate_polling(config: &toml::Value, errors: &mut Vec<String>) {
    match config.get("poll_interval_ms") {
        Some(toml::Value::Integer(ms)) if *ms <= 0 || *ms > u32::MAX as i64 => {
            errors.push("poll_interval_ms must be a positive u32".to_string());
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("poll_interval_ms must be an integer".to_string()),
    }

    if let Some(mode) = config.get("mode") {
        match mode.as_str() {
            Some("servers") | Some("containers") => {}
            _ => errors.push("mode must be 'servers' or 'containers'".to_string()),
        }
    }
}

/// Validate the [[servers]] list
fn validate_servers(config: &toml::Value, errors: &mut Vec<String>) {
    let servers = match config.get("servers") {
        Some(toml::Value::Array(servers)) => servers,
        Some(_) => {
            errors.push("servers must be an array of tables".to_string());
            return;
        }
        None => return,
    };

    if servers.is_empty() {
        errors.push("servers cannot be empty".to_string());
    }
    if servers.len() > MAX_SERVERS {
        errors.push(format!("at most {} servers fit on the panel", MAX_SERVERS));
    }

    let mut keys: Vec<&str> = Vec::new();
    for (i, server) in servers.iter().enumerate() {
        let server = match server.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[[servers]] entry {} must be a table", i));
                continue;
            }
        };

        match server.get("key").and_then(|k| k.as_str()) {
            Some(key) if key.is_empty() || key.len() > MAX_KEY_LEN => {
                errors.push(format!("[[servers]] entry {} key must be 1-{} bytes", i, MAX_KEY_LEN));
            }
            Some(key) if keys.contains(&key) => {
                errors.push(format!("[[servers]] duplicate key '{}'", key));
            }
            Some(key) => keys.push(key),
            None => errors.push(format!("[[servers]] entry {} missing 'key'", i)),
        }

        match server.get("label").and_then(|l| l.as_str()) {
            Some(label) if label.len() > MAX_LABEL_LEN => {
                errors.push(format!(
                    "[[servers]] entry {} label longer than {} bytes",
                    i, MAX_LABEL_LEN
                ));
            }
            Some(_) => {}
            None => errors.push(format!("[[servers]] entry {} missing 'label'", i)),
        }

        if let Some(players) = server.get("players") {
            if players.as_bool().is_none() {
                errors.push(format!("[[servers]] entry {} players must be a boolean", i));
            }
        }
    }
}
