//! Dungeon domain: the fade-and-swap transition state machine.
//!
//! The machine is advanced only by the tick system feeding it frame
//! deltas, so tests can drive it with synthetic timestamps.

use bevy::prelude::*;
use std::time::Duration;

use crate::layout::{Direction, RoomId};

/// Alpha above which the screen counts as obscured and gameplay updates
/// are suspended.
pub const SUSPEND_ALPHA: f32 = 0.9;

const DEFAULT_FADE_DURATION: f32 = 0.3;
const DEFAULT_DOOR_COOLDOWN: f32 = 1.0;

/// The room swap queued behind the fade, executed at the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwap {
    pub target_room: RoomId,
    pub target_slot: Direction,
}

/// Full-screen fade overlaying a room change. `alpha` rises 0 to 1 over
/// the first half of `duration`, the swap fires once at the midpoint
/// while the screen is dark, then alpha falls back to 0.
#[derive(Resource, Debug)]
pub struct TransitionEffect {
    pub active: bool,
    pub fading_in: bool,
    pub alpha: f32,
    pub elapsed: f32,
    pub duration: f32,
    pub pending: Option<PendingSwap>,
}

impl Default for TransitionEffect {
    fn default() -> Self {
        Self {
            active: false,
            fading_in: false,
            alpha: 0.0,
            elapsed: 0.0,
            duration: DEFAULT_FADE_DURATION,
            pending: None,
        }
    }
}

impl TransitionEffect {
    /// Arm the fade for a new transition. Callers must have already
    /// checked the cooldown; a transition in flight is never replaced.
    pub fn begin(&mut self, swap: PendingSwap) {
        self.active = true;
        self.fading_in = false;
        self.alpha = 0.0;
        self.elapsed = 0.0;
        self.pending = Some(swap);
    }

    /// True while the screen is dark enough that gameplay should hold.
    pub fn obscured(&self) -> bool {
        self.active && self.alpha >= SUSPEND_ALPHA
    }

    /// Advance the fade by `dt` seconds. Returns the pending swap
    /// exactly once, at the tick that crosses the midpoint.
    pub fn advance(&mut self, dt: f32) -> Option<PendingSwap> {
        if !self.active {
            return None;
        }

        self.elapsed += dt;
        let half = self.duration * 0.5;

        if !self.fading_in {
            self.alpha = (self.elapsed / half).min(1.0);
            if self.elapsed >= half {
                self.fading_in = true;
                return self.pending.take();
            }
            return None;
        }

        self.alpha = (1.0 - (self.elapsed - half) / half).clamp(0.0, 1.0);
        if self.elapsed >= self.duration {
            self.active = false;
            self.alpha = 0.0;
        }
        None
    }
}

/// Run condition: gameplay updates pause while the fade has the screen
/// sufficiently obscured.
pub fn gameplay_running(fade: Res<TransitionEffect>) -> bool {
    !fade.obscured()
}

/// Global cooldown between door transitions, shared by every door. Stops
/// a single approach from double-triggering and rate-limits hopping
/// between adjacent doors.
#[derive(Resource, Debug)]
pub struct TransitionCooldown {
    pub timer: Timer,
}

impl Default for TransitionCooldown {
    fn default() -> Self {
        // Starts expired: the first transition of a fresh dungeon is
        // never gated.
        let mut timer = Timer::from_seconds(DEFAULT_DOOR_COOLDOWN, TimerMode::Once);
        timer.tick(Duration::from_secs_f32(DEFAULT_DOOR_COOLDOWN));
        Self { timer }
    }
}

impl TransitionCooldown {
    pub fn with_duration(seconds: f32) -> Self {
        let mut timer = Timer::from_seconds(seconds, TimerMode::Once);
        timer.tick(Duration::from_secs_f32(seconds));
        Self { timer }
    }

    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    pub fn can_transition(&self) -> bool {
        self.timer.is_finished()
    }
}
