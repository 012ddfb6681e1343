//! Monitor errors

use inkwatch_display::DisplayError;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML syntax error, unknown value or overlong string
    TomlParse,
    /// No servers configured
    NoServers,
    /// More servers than columns
    TooManyServers,
    /// Poll interval of zero
    InvalidInterval,
    /// Layout does not fit the panel
    InvalidLayout,
}

/// Status fetch errors, reported by the HTTP transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FetchError {
    /// Network link dropped during the request
    LinkDown,
    /// No response in time
    Timeout,
    /// Non-success HTTP status code
    Http(u16),
    /// Connection or protocol error
    Transport,
}

/// Errors that abort a monitor cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// Panel refresh failed
    Display(DisplayError),
}

impl From<DisplayError> for MonitorError {
    fn from(e: DisplayError) -> Self {
        MonitorError::Display(e)
    }
}
