//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Grid units moved per applied step.
    pub step_size: f32,
    /// Seconds between steps, independent of frame rate.
    pub step_cooldown: f32,
    /// Fraction of the step applied on the Y axis while X is blocked,
    /// producing a wall-hugging glide instead of a hard stop.
    pub slide_factor: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            step_size: 0.16,
            step_cooldown: 0.03,
            slide_factor: 1.0 / 3.0,
        }
    }
}

/// Combined direction sampled from the keyboard this frame, in grid axes.
/// Unnormalized; the step system normalizes before applying.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub direction: Vec2,
}

/// Tracks when the last step was applied, gating the step cadence.
#[derive(Resource, Debug, Default)]
pub struct StepTimer {
    pub last_step_secs: f32,
}
