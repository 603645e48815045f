use crate::error::{DbResult, DragboardError};
use crate::layouts::Layout;
use clap::{ArgAction, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use strum_macros::{Display, EnumString};
use tracing::warn;

pub const DWELL_MIN_SECS: f32 = 0.1;
pub const DWELL_MAX_SECS: f32 = 10.0;
pub const DWELL_DEFAULT_SECS: f32 = 0.5;

/// How selections are inferred from the drag path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DragMode {
    /// Rest on a cell for the dwell duration.
    #[default]
    Dwell,
    /// Turn sharply at a cell.
    DirectionChange,
}

/// Live user settings. Read on every sample for thresholds; mode and layout
/// take effect at the next gesture start.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[arg(long, value_enum, default_value_t = DragMode::Dwell)]
    pub mode: DragMode,

    /// Seconds the pointer must rest to select, clamped to [0.1, 10.0]
    #[arg(long, default_value_t = DWELL_DEFAULT_SECS)]
    pub dwell_duration: f32,

    #[arg(long, value_enum, default_value_t = Layout::Alphabetical)]
    pub layout: Layout,

    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub autocorrect_enabled: bool,

    /// Commit words without a visible space between them
    #[arg(long, action = ArgAction::Set, default_value_t = false)]
    pub write_without_spaces: bool,

    /// Rendering hint for the host, no core effect
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub show_trail: bool,

    /// Rendering hint for the host, no core effect
    #[arg(long, action = ArgAction::Set, default_value_t = false)]
    pub enlarge_keys: bool,

    /// Locale passed to the spell corrector
    #[arg(long, default_value = "en")]
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: DragMode::Dwell,
            dwell_duration: DWELL_DEFAULT_SECS,
            layout: Layout::Alphabetical,
            autocorrect_enabled: true,
            write_without_spaces: false,
            show_trail: true,
            enlarge_keys: false,
            locale: "en".to_string(),
        }
    }
}

impl Settings {
    /// The dwell threshold as a `Duration`, clamped into its domain. Out of
    /// domain values never fail the core, they clamp to the nearest bound.
    pub fn dwell_threshold(&self) -> Duration {
        let raw = self.dwell_duration;
        if !raw.is_finite() {
            warn!("non-finite dwell duration {}, using default", raw);
            return Duration::from_secs_f32(DWELL_DEFAULT_SECS);
        }
        let clamped = raw.clamp(DWELL_MIN_SECS, DWELL_MAX_SECS);
        if clamped != raw {
            warn!(
                "dwell duration {} outside [{}, {}], clamped to {}",
                raw, DWELL_MIN_SECS, DWELL_MAX_SECS, clamped
            );
        }
        Duration::from_secs_f32(clamped)
    }

    /// The token committed after each finalized word.
    pub fn delimiter(&self) -> &'static str {
        if self.write_without_spaces {
            ""
        } else {
            " "
        }
    }

    /// Recoverable validation for the configuration boundary. The core clamps
    /// regardless; this lets a settings UI surface the problem.
    pub fn validate(&self) -> DbResult<()> {
        if !self.dwell_duration.is_finite()
            || self.dwell_duration < DWELL_MIN_SECS
            || self.dwell_duration > DWELL_MAX_SECS
        {
            return Err(DragboardError::Config(format!(
                "dwell_duration {} outside [{}, {}]",
                self.dwell_duration, DWELL_MIN_SECS, DWELL_MAX_SECS
            )));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
