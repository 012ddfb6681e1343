//! Polling loop
//!
//! [`Monitor`] owns the panel, the canvas and both collaborators and
//! advances one step per [`Monitor::poll`]. The caller drives it from its
//! own timer and passes the current instant in; the monitor never reads a
//! clock itself.
//!
//! A poll goes through:
//! 1. Link check: while down, show the connection screen once and try to
//!    reconnect
//! 2. Rate limit: nothing happens until the poll interval has passed since
//!    the last fetch attempt
//! 3. Fetch and decode the status document
//! 4. Render and present, unless the data matches the frame on the panel

use embassy_time::{Duration, Instant};
use embedded_graphics::mono_font::MonoFont;

use inkwatch_core::config::{DisplayMode, MonitorConfig};
use inkwatch_core::screens::{connection_screen, container_screen};
use inkwatch_core::{
    ConnectionStatus, ContainerSummary, DashboardRenderer, DrawPlan, LinkState, Snapshot,
};
use inkwatch_display::{present, wipe, Canvas, EpdPanel, FontMetrics};
use inkwatch_protocol::{parse_containers, parse_status, DecodeError};

use crate::error::{FetchError, MonitorError};
use crate::link::NetworkLink;
use crate::source::StatusSource;

/// Why a poll did not produce new data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SkipReason {
    Fetch(FetchError),
    Decode(DecodeError),
}

impl SkipReason {
    /// Notice for the connection screen
    pub fn notice(&self) -> &'static str {
        match self {
            SkipReason::Fetch(_) => "Server Error",
            SkipReason::Decode(_) => "JSON Parse Error",
        }
    }
}

/// Outcome of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cycle {
    /// Link down; reconnect attempted
    Offline,
    /// Poll interval not yet elapsed
    Idle,
    /// Fetch or decode failed
    ///
    /// The dashboard keeps its stale frame. The container screen is
    /// replaced by the connection screen with an error notice.
    Skipped(SkipReason),
    /// Data matches the frame on the panel
    Unchanged,
    /// New frame presented
    Rendered { commands: usize },
}

/// E-paper status monitor
pub struct Monitor<'f, L, S, P> {
    config: MonitorConfig,
    link: L,
    source: S,
    panel: P,
    canvas: Canvas,
    font: &'f MonoFont<'f>,
    interval: Duration,
    /// Link state at the last poll
    link_up: bool,
    /// Last fetch attempt
    last_fetch: Option<Instant>,
    /// Snapshot currently on the panel
    last_snapshot: Option<Snapshot>,
    /// Last successful container update
    last_update: Option<Instant>,
}

impl<'f, L, S, P> Monitor<'f, L, S, P>
where
    L: NetworkLink,
    S: StatusSource,
    P: EpdPanel,
{
    /// Create a monitor
    ///
    /// `config` must have passed validation for the panel size; the layout
    /// engine panics on geometry that does not fit.
    pub fn new(config: MonitorConfig, link: L, source: S, panel: P, font: &'f MonoFont<'f>) -> Self {
        let canvas = Canvas::new(panel.dimensions());
        let interval = Duration::from_millis(u64::from(config.poll_interval_ms));
        Self {
            config,
            link,
            source,
            panel,
            canvas,
            font,
            interval,
            link_up: false,
            last_fetch: None,
            last_snapshot: None,
            last_update: None,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Frame last drawn
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Panel driver
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Clear the panel and show the current link state
    pub fn start(&mut self, now: Instant) -> Result<(), MonitorError> {
        info!(
            "Starting monitor: {} servers, poll every {} ms",
            self.config.servers.len(),
            self.config.poll_interval_ms
        );

        wipe(&mut self.panel, &mut self.canvas)?;

        let state = self.link.state();
        self.link_up = state.is_connected();
        self.last_fetch = None;
        self.last_update = Some(now);
        self.show_connection(&ConnectionStatus::new(state))
    }

    /// Advance the monitor by one step
    pub fn poll(&mut self, now: Instant) -> Result<Cycle, MonitorError> {
        let state = self.link.state();
        if !state.is_connected() {
            return self.recover_link();
        }
        if !self.link_up {
            info!("Link up");
            self.link_up = true;
        }

        if let Some(last) = self.last_fetch {
            if now.saturating_duration_since(last) < self.interval {
                return Ok(Cycle::Idle);
            }
        }
        self.last_fetch = Some(now);

        let payload = match self.source.fetch() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Status fetch failed: {}", e);
                return self.skip(SkipReason::Fetch(e), state);
            }
        };
        debug!("Fetched {} bytes", payload.len());

        match self.config.mode {
            DisplayMode::Servers => self.update_servers(&payload, state),
            DisplayMode::Containers => self.update_containers(&payload, state, now),
        }
    }

    fn recover_link(&mut self) -> Result<Cycle, MonitorError> {
        if self.link_up {
            warn!("Link down");
            self.link_up = false;
            self.show_connection(&ConnectionStatus::new(LinkState::Disconnected))?;
        }

        let state = self.link.reconnect();
        if state.is_connected() {
            info!("Link restored");
            self.link_up = true;
            self.last_fetch = None;
            self.show_connection(&ConnectionStatus::new(state))?;
        }

        Ok(Cycle::Offline)
    }

    fn update_servers(&mut self, payload: &[u8], link: LinkState) -> Result<Cycle, MonitorError> {
        let document = match parse_status(payload) {
            Ok(document) => document,
            Err(e) => {
                warn!("Status decode failed: {}", e);
                return self.skip(SkipReason::Decode(e), link);
            }
        };

        let snapshot = Snapshot::from_document(&document, &self.config.servers);
        if self.last_snapshot.as_ref() == Some(&snapshot) {
            debug!("Snapshot unchanged");
            return Ok(Cycle::Unchanged);
        }

        let metrics = FontMetrics::new(self.font);
        let plan = DashboardRenderer::new(&self.config.layout, metrics)
            .render(&snapshot, self.canvas.canvas_size());
        let commands = self.show(&plan)?;
        self.last_snapshot = Some(snapshot);

        Ok(Cycle::Rendered { commands })
    }

    fn update_containers(
        &mut self,
        payload: &[u8],
        link: LinkState,
        now: Instant,
    ) -> Result<Cycle, MonitorError> {
        let document = match parse_containers(payload) {
            Ok(document) => document,
            Err(e) => {
                warn!("Container decode failed: {}", e);
                return self.skip(SkipReason::Decode(e), link);
            }
        };

        let summary = ContainerSummary::from_document(&document);
        let since = self.last_update.unwrap_or(now);
        let elapsed_s = now.saturating_duration_since(since).as_secs();
        self.last_update = Some(now);

        let plan = container_screen(
            &summary,
            elapsed_s,
            self.canvas.canvas_size(),
            &self.config.layout,
            &FontMetrics::new(self.font),
        );
        let commands = self.show(&plan)?;

        Ok(Cycle::Rendered { commands })
    }

    fn skip(&mut self, reason: SkipReason, link: LinkState) -> Result<Cycle, MonitorError> {
        if self.config.mode == DisplayMode::Containers {
            self.show_connection(&ConnectionStatus::new(link).with_notice(reason.notice()))?;
        }
        Ok(Cycle::Skipped(reason))
    }

    fn show_connection(&mut self, status: &ConnectionStatus) -> Result<(), MonitorError> {
        // Replaces whatever dashboard frame was on the panel
        self.last_snapshot = None;
        let plan = connection_screen(
            status,
            self.canvas.canvas_size(),
            &self.config.layout,
            &FontMetrics::new(self.font),
        );
        self.show(&plan).map(|_| ())
    }

    /// Rasterize `plan` and present it, returning the command count
    fn show(&mut self, plan: &DrawPlan) -> Result<usize, MonitorError> {
        self.canvas.apply(plan, self.font);
        present(&mut self.panel, &self.canvas)?;
        debug!("Presented {} draw commands", plan.len());
        Ok(plan.len())
    }
}
