//! Movement domain: player locomotion plugin wiring and public exports.

mod components;
mod resolver;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GridPosition, Player};
pub use resolver::{Aabb, MapBounds, resolve_step};
pub use resources::{MovementInput, MovementTuning, StepTimer};
pub(crate) use systems::step::apply_step;

use bevy::prelude::*;

use crate::dungeon::gameplay_running;
use crate::movement::systems::{configure_tuning, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<StepTimer>()
            .add_systems(Startup, configure_tuning)
            .add_systems(Update, read_input)
            .add_systems(
                Update,
                apply_step.after(read_input).run_if(gameplay_running),
            );
    }
}
