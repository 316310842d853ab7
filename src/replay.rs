//! Scripted gesture replay.
//!
//! A [`Scenario`] describes one gesture (start, moves, end) plus the host
//! facts the controller will query. [`run`] drives a controller through it
//! and collects every emitted action. Rejected events are recorded and the
//! replay continues, mirroring how a host keeps feeding events after a
//! malformed one.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{ConfigError, ResizeConfig};
use crate::controller::{ResizeAction, ResizeController};
use crate::error::ResizeError;
use crate::geometry::Dimensions;
use crate::gesture::{GesturePointer, GestureStart};
use crate::host::{ElementId, StaticHost, TargetId};

/// Handle the fixture host assigns to the text overflow target.
pub const OVERFLOW_TARGET: TargetId = TargetId(1);
/// Handle the fixture host assigns to the image preview target.
pub const PREVIEW_TARGET: TargetId = TargetId(2);

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl ReplayError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_SCENARIO_IO",
            Self::Json(_) => "E_JSON",
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Host-side facts for the scenario's element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HostFixture {
    /// Size the element renders at.
    #[serde(default)]
    pub rendered_size: Option<Dimensions>,
    /// Natural size of the text overflow target, if the element has one.
    #[serde(default)]
    pub overflow_natural_size: Option<Dimensions>,
    /// Whether the element has an image preview target.
    #[serde(default)]
    pub preview_target: bool,
}

impl HostFixture {
    #[must_use]
    pub fn into_host(self, element: ElementId) -> StaticHost {
        let mut host = StaticHost::new();
        if let Some(size) = self.rendered_size {
            host = host.with_rendered_size(element, size);
        }
        if let Some(natural) = self.overflow_natural_size {
            host = host.with_overflow_target(element, OVERFLOW_TARGET, natural);
        }
        if self.preview_target {
            host = host.with_preview_target(element, PREVIEW_TARGET);
        }
        host
    }
}

/// One scripted gesture.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub start: GestureStart,
    #[serde(default)]
    pub moves: Vec<GesturePointer>,
    pub end: GesturePointer,
    #[serde(default)]
    pub host: HostFixture,
    /// Kind table config for this scenario. Relative paths resolve against
    /// the scenario file's directory.
    #[serde(default)]
    pub config: Option<PathBuf>,
}

impl Scenario {
    /// Parse a scenario document.
    ///
    /// # Errors
    ///
    /// Returns `Json` if `raw` is not a valid scenario.
    pub fn from_json_str(raw: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `Json` if it is malformed.
    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let raw =
            std::fs::read_to_string(path).map_err(|source| ReplayError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    /// Load the config this scenario names, or fall back to
    /// [`ResizeConfig::from_env`] when it names none.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the named file cannot be read or parsed.
    pub fn load_config(&self, scenario_path: &Path) -> Result<ResizeConfig, ReplayError> {
        let Some(config) = &self.config else {
            return Ok(ResizeConfig::from_env()?);
        };
        let path = match scenario_path.parent() {
            Some(dir) if config.is_relative() => dir.join(config),
            _ => config.clone(),
        };
        Ok(ResizeConfig::from_path(&path)?)
    }
}

/// Which scripted event a rejection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "index", rename_all = "snake_case")]
pub enum ReplayStep {
    Start,
    Move(usize),
    End,
}

/// A scripted event the controller refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    #[serde(flatten)]
    pub step: ReplayStep,
    pub code: &'static str,
    pub message: String,
}

impl Rejection {
    fn new(step: ReplayStep, err: &ResizeError) -> Self {
        warn!(?step, code = err.error_code(), error = %err, "event rejected");
        Self { step, code: err.error_code(), message: err.to_string() }
    }
}

/// Everything a replay produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayOutcome {
    pub actions: Vec<ResizeAction>,
    pub rejected: Vec<Rejection>,
}

impl ReplayOutcome {
    /// No event was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Drive `controller` through `scenario`.
///
/// A rejected start ends the replay, since no gesture is active to move.
pub fn run(controller: &mut ResizeController, scenario: Scenario) -> ReplayOutcome {
    let mut outcome = ReplayOutcome::default();
    let element = scenario.start.element;
    let host = scenario.host.into_host(element);

    info!(%element, moves = scenario.moves.len(), "replaying gesture");

    match controller.on_gesture_start(&host, scenario.start) {
        Ok(actions) => outcome.actions.extend(actions),
        Err(err) => {
            outcome.rejected.push(Rejection::new(ReplayStep::Start, &err));
            return outcome;
        }
    }

    for (index, event) in scenario.moves.into_iter().enumerate() {
        match controller.on_gesture_move(&host, event) {
            Ok(actions) => outcome.actions.extend(actions),
            Err(err) => outcome.rejected.push(Rejection::new(ReplayStep::Move(index), &err)),
        }
    }

    match controller.on_gesture_end(scenario.end) {
        Ok(actions) => outcome.actions.extend(actions),
        Err(err) => {
            outcome.rejected.push(Rejection::new(ReplayStep::End, &err));
            if controller.cancel().is_err() {
                warn!(%element, "gesture already closed after rejected end");
            }
        }
    }

    outcome
}
