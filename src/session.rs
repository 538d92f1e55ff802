//! Scripted input sessions for headless runs.
//!
//! A session is a TOML list of steps. Each step optionally executes a
//! [`RigCommand`] and then feeds the same pointer state to the rig for
//! `repeat` ticks:
//!
//! ```toml
//! dt = 0.016
//!
//! [[steps]]
//! pointer = [0.0, 0.0]
//! secondary = true
//!
//! [[steps]]
//! pointer = [40.0, 0.0]
//! secondary = true
//! repeat = 30
//!
//! [[steps]]
//! command = { kind = "reset" }
//! ```

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraMode, CameraRig, Pose, TickReport};
use crate::command::RigCommand;
use crate::error::RigError;
use crate::input::FrameInput;

/// Serializable form of [`RigCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Snap to the default pose.
    Reset,
    /// Switch camera mode.
    SetMode {
        /// Mode to switch to.
        mode: CameraMode,
    },
    /// Replace or clear the fixed pivot.
    SetPivot {
        /// New pivot, omitted to clear it.
        #[serde(default)]
        pivot: Option<[f32; 3]>,
    },
    /// Detach the rig.
    Shutdown,
}

impl From<SessionCommand> for RigCommand {
    fn from(command: SessionCommand) -> Self {
        match command {
            SessionCommand::Reset => Self::ResetToDefault,
            SessionCommand::SetMode { mode } => Self::SetMode { mode },
            SessionCommand::SetPivot { pivot } => Self::SetPivot {
                pivot: pivot.map(Vec3::from_array),
            },
            SessionCommand::Shutdown => Self::Shutdown,
        }
    }
}

/// One scripted step: an optional command, then `repeat` identical ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStep {
    /// Command executed before this step's ticks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<SessionCommand>,
    /// Pointer position (y up).
    pub pointer: [f32; 2],
    /// Primary button held.
    pub primary: bool,
    /// Secondary button held.
    pub secondary: bool,
    /// Scroll delivered on the first tick of the step.
    pub scroll: f32,
    /// Pointer over a UI surface.
    pub over_ui: bool,
    /// Number of ticks to run.
    pub repeat: u32,
}

impl Default for SessionStep {
    fn default() -> Self {
        Self {
            command: None,
            pointer: [0.0, 0.0],
            primary: false,
            secondary: false,
            scroll: 0.0,
            over_ui: false,
            repeat: 1,
        }
    }
}

impl SessionStep {
    fn frame(&self, dt: f32, first_tick: bool) -> FrameInput {
        FrameInput {
            pointer: Vec2::from_array(self.pointer),
            primary_held: self.primary,
            secondary_held: self.secondary,
            scroll: if first_tick { self.scroll } else { 0.0 },
            dt,
            over_ui: self.over_ui,
        }
    }
}

/// Rig state recorded after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSample {
    /// Index of the step that produced this tick.
    pub step: usize,
    /// What the tick did.
    pub report: TickReport,
    /// Target pose after the tick.
    pub target: Pose,
    /// Rendered pose after the tick.
    pub rendered: Pose,
}

/// A scripted list of steps with a fixed tick length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Seconds per tick.
    pub dt: f32,
    /// Steps in playback order.
    pub steps: Vec<SessionStep>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            steps: Vec::new(),
        }
    }
}

impl Session {
    /// Load a session from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse a session from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, RigError> {
        let session: Self = toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if !(session.dt.is_finite() && session.dt > 0.0) {
            return Err(RigError::InvalidConfiguration(format!(
                "session dt must be > 0, got {}",
                session.dt
            )));
        }
        Ok(session)
    }

    /// Total number of ticks the session will run.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.steps.iter().map(|s| s.repeat as usize).sum()
    }

    /// Play every step against `rig`, sampling after each tick.
    pub fn play(&self, rig: &mut CameraRig) -> Vec<SessionSample> {
        let mut samples = Vec::with_capacity(self.tick_count());
        for (index, step) in self.steps.iter().enumerate() {
            if let Some(command) = step.command {
                rig.execute(command.into());
            }
            for tick in 0..step.repeat {
                let report = rig.tick(&step.frame(self.dt, tick == 0));
                samples.push(SessionSample {
                    step: index,
                    report,
                    target: *rig.target(),
                    rendered: *rig.rendered(),
                });
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::InteractionState;
    use crate::options::RigOptions;

    const SCRIPT: &str = r#"
dt = 0.02

[[steps]]
pointer = [0.0, 0.0]
secondary = true

[[steps]]
pointer = [40.0, 0.0]
secondary = true
repeat = 3

[[steps]]
command = { kind = "set_mode", mode = "constrained" }
scroll = 0.5

[[steps]]
command = { kind = "reset" }
repeat = 2
"#;

    #[test]
    fn parses_steps_and_defaults() {
        let session = Session::from_toml(SCRIPT).unwrap();
        assert_eq!(session.dt, 0.02);
        assert_eq!(session.steps.len(), 4);
        assert_eq!(session.steps[0].repeat, 1);
        assert_eq!(
            session.steps[2].command,
            Some(SessionCommand::SetMode {
                mode: CameraMode::Constrained
            })
        );
        assert_eq!(session.tick_count(), 7);
    }

    #[test]
    fn playback_samples_every_tick() {
        let session = Session::from_toml(SCRIPT).unwrap();
        let mut rig = CameraRig::new(&RigOptions::default()).unwrap();
        let samples = session.play(&mut rig);

        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0].report.state, InteractionState::Orbiting);
        assert_eq!(samples[1].report.state, InteractionState::Orbiting);
        assert_eq!(rig.mode(), CameraMode::Constrained);

        let last = samples[samples.len() - 1];
        assert_eq!(last.rendered, *rig.default_pose());
        assert!(!last.report.eased);
    }

    #[test]
    fn rejects_non_positive_dt() {
        let err = Session::from_toml("dt = 0.0").unwrap_err();
        assert!(matches!(err, RigError::InvalidConfiguration(_)));
    }

    #[test]
    fn pivot_command_converts() {
        let cmd: RigCommand = SessionCommand::SetPivot {
            pivot: Some([1.0, 2.0, 3.0]),
        }
        .into();
        assert_eq!(
            cmd,
            RigCommand::SetPivot {
                pivot: Some(Vec3::new(1.0, 2.0, 3.0))
            }
        );
    }
}
