mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod dungeon;
mod layout;
mod movement;
mod sprites;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Undercroft".to_string(),
            resolution: (1280u32, 720u32).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        sprites::SpritesPlugin,
        movement::MovementPlugin,
        dungeon::DungeonPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
