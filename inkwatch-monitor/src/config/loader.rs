//! TOML configuration loader

use alloc::vec::Vec;

use serde::Deserialize;

use inkwatch_core::config::{DisplayMode, LayoutConfig, MonitorConfig, ServerSpec, MAX_SERVERS};
use inkwatch_core::CanvasSize;

use crate::error::ConfigError;

/// Configuration embedded at build time
pub const DEFAULT_CONFIG: &str = include_str!("../../monitor.toml");

/// Document shape before validation
///
/// Servers are collected unbounded so an overlong list is reported as
/// [`ConfigError::TooManyServers`] rather than a parse error.
#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    poll_interval_ms: u32,
    mode: DisplayMode,
    layout: LayoutConfig,
    servers: Vec<ServerSpec>,
}

impl Default for RawConfig {
    fn default() -> Self {
        let defaults = MonitorConfig::default();
        Self {
            poll_interval_ms: defaults.poll_interval_ms,
            mode: defaults.mode,
            layout: defaults.layout,
            servers: defaults.servers.iter().cloned().collect(),
        }
    }
}

/// Parse and validate a TOML configuration for a panel of `canvas` size
pub fn parse_config(text: &str, canvas: CanvasSize) -> Result<MonitorConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(text).map_err(|_| {
        warn!("TOML parse error in monitor config");
        ConfigError::TomlParse
    })?;

    if raw.poll_interval_ms == 0 {
        return Err(ConfigError::InvalidInterval);
    }
    if raw.servers.is_empty() {
        return Err(ConfigError::NoServers);
    }
    if raw.servers.len() > MAX_SERVERS {
        warn!("{} servers configured, at most {} fit", raw.servers.len(), MAX_SERVERS);
        return Err(ConfigError::TooManyServers);
    }
    check_layout(&raw.layout, raw.servers.len(), canvas)?;

    let mut config = MonitorConfig::empty();
    config.poll_interval_ms = raw.poll_interval_ms;
    config.mode = raw.mode;
    config.layout = raw.layout;
    for spec in raw.servers {
        config
            .servers
            .push(spec)
            .map_err(|_| ConfigError::TooManyServers)?;
    }

    log_config_summary(&config);
    Ok(config)
}

/// Load the embedded configuration
pub fn load_default(canvas: CanvasSize) -> Result<MonitorConfig, ConfigError> {
    info!("Loading embedded monitor configuration");
    parse_config(DEFAULT_CONFIG, canvas)
}

/// Check that `layout` fits `canvas` with `server_count` columns
///
/// Rejects every geometry the layout engine would refuse, and any spacing
/// larger than the panel itself, so a validated configuration never trips
/// its assertions.
pub fn check_layout(
    layout: &LayoutConfig,
    server_count: usize,
    canvas: CanvasSize,
) -> Result<(), ConfigError> {
    let margins = &layout.columns;
    let count = server_count.max(1) as u32;

    let reserved = margins
        .gap
        .checked_mul(count - 1)
        .and_then(|gaps| gaps.checked_add(margins.left))
        .and_then(|sum| sum.checked_add(margins.right))
        .ok_or(ConfigError::InvalidLayout)?;
    let vertical = margins
        .top
        .checked_add(margins.bottom)
        .ok_or(ConfigError::InvalidLayout)?;
    if canvas.width <= reserved || canvas.height <= vertical || margins.top == 0 {
        return Err(ConfigError::InvalidLayout);
    }

    let column_width = (canvas.width - reserved) / count;
    let block_padding = double(layout.block_padding)?;
    if column_width <= block_padding {
        return Err(ConfigError::InvalidLayout);
    }

    let header_padding = double(layout.header_padding)?;
    if canvas.width <= header_padding {
        return Err(ConfigError::InvalidLayout);
    }

    let stats_x = layout.stats_left.saturating_sub(layout.header_padding);
    if stats_x >= canvas.width || canvas.width - stats_x <= header_padding {
        return Err(ConfigError::InvalidLayout);
    }

    let horizontal = [layout.title_indent, layout.stats_spacing];
    let gaps = [
        layout.title_gap,
        layout.name_gap,
        layout.players_gap,
        layout.wrap_gap,
        layout.log_gap,
    ];
    if horizontal.iter().any(|&px| px > canvas.width) || gaps.iter().any(|&px| px > canvas.height) {
        warn!("layout spacing exceeds the {}x{} panel", canvas.width, canvas.height);
        return Err(ConfigError::InvalidLayout);
    }

    Ok(())
}

fn double(padding: u32) -> Result<u32, ConfigError> {
    padding.checked_mul(2).ok_or(ConfigError::InvalidLayout)
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &MonitorConfig) {
    info!("Configuration loaded successfully");
    debug!("  poll every {} ms", config.poll_interval_ms);
    debug!("  mode {}", config.mode);
    for spec in config.servers.iter() {
        debug!("  server {} as {}", spec.key.as_str(), spec.label.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: CanvasSize = CanvasSize::EPD_960X540;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = load_default(PANEL).unwrap();
        assert_eq!(config, MonitorConfig::default());
    }

    #[test]
    fn test_minimal_config() {
        let config = parse_config(
            r#"
            mode = "containers"

            [[servers]]
            key = "web"
            label = "WEB"
            "#,
            PANEL,
        )
        .unwrap();

        assert_eq!(config.mode, DisplayMode::Containers);
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.servers.len(), 1);
        assert!(!config.servers[0].players);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_missing_servers_uses_defaults() {
        let config = parse_config("poll_interval_ms = 60000", PANEL).unwrap();
        assert_eq!(config.poll_interval_ms, 60000);
        assert_eq!(config.servers.len(), 3);
    }

    #[test]
    fn test_rejects_empty_server_list() {
        assert_eq!(parse_config("servers = []", PANEL), Err(ConfigError::NoServers));
    }

    #[test]
    fn test_rejects_too_many_servers() {
        let mut text = alloc::string::String::new();
        for i in 0..5 {
            text.push_str(&alloc::format!("[[servers]]\nkey = \"s{}\"\nlabel = \"S{}\"\n", i, i));
        }
        assert_eq!(parse_config(&text, PANEL), Err(ConfigError::TooManyServers));
    }

    #[test]
    fn test_rejects_zero_interval() {
        assert_eq!(
            parse_config("poll_interval_ms = 0", PANEL),
            Err(ConfigError::InvalidInterval)
        );
    }

    #[test]
    fn test_rejects_syntax_and_unknown_mode() {
        assert_eq!(parse_config("mode = ", PANEL), Err(ConfigError::TomlParse));
        assert_eq!(parse_config("mode = \"graphs\"", PANEL), Err(ConfigError::TomlParse));
    }

    #[test]
    fn test_rejects_overlong_label() {
        let text = r#"
            [[servers]]
            key = "k"
            label = "THIS LABEL IS FAR TOO LONG FOR A COLUMN"
        "#;
        assert_eq!(parse_config(text, PANEL), Err(ConfigError::TomlParse));
    }

    #[test]
    fn test_rejects_layout_that_does_not_fit() {
        let text = r#"
            [layout.columns]
            gap = 500
        "#;
        assert_eq!(parse_config(text, PANEL), Err(ConfigError::InvalidLayout));
    }

    #[test]
    fn test_rejects_overflowing_margins() {
        for text in [
            "[layout.columns]\ngap = 4000000000\n",
            "[layout.columns]\nleft = 4294967295\nright = 10\n",
            "[layout.columns]\ntop = 4294967295\nbottom = 1\n",
            "[layout]\nblock_padding = 2147483648\n",
            "[layout]\nheader_padding = 2147483648\n",
        ] {
            assert_eq!(parse_config(text, PANEL), Err(ConfigError::InvalidLayout), "{}", text);
        }
    }

    #[test]
    fn test_rejects_gaps_taller_than_panel() {
        for key in ["title_gap", "name_gap", "players_gap", "wrap_gap", "log_gap"] {
            let text = alloc::format!("[layout]\n{} = 4294967295\n", key);
            assert_eq!(parse_config(&text, PANEL), Err(ConfigError::InvalidLayout), "{}", key);
        }
        assert_eq!(
            parse_config("[layout]\nstats_spacing = 5000\n", PANEL),
            Err(ConfigError::InvalidLayout)
        );
        assert!(parse_config("[layout]\nname_gap = 540\n", PANEL).is_ok());
    }

    #[test]
    fn test_default_layout_fits_every_server_count() {
        for count in 1..=MAX_SERVERS {
            assert_eq!(check_layout(&LayoutConfig::default(), count, PANEL), Ok(()));
        }
    }
}
