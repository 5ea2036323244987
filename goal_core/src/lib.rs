pub mod camera;
pub mod components;
pub mod config;
pub mod curve;
pub mod demo;
pub mod game;
pub mod goal;
pub mod input;
pub mod material;
pub mod params;
pub mod primitives;
pub mod resources;
pub mod scene;
pub mod systems;
pub mod transform;
pub mod viewer;

pub use camera::*;
pub use components::*;
pub use config::*;
pub use curve::*;
pub use demo::Demo;
pub use game::GoalGame;
pub use goal::*;
pub use input::*;
pub use material::*;
pub use params::*;
pub use primitives::*;
pub use resources::*;
pub use scene::*;
pub use viewer::{GoalViewer, ViewerState};

use hecs::World;

/// Helper to create the ball entity
pub fn spawn_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Helper to create a card entity
pub fn spawn_card(world: &mut World, card: Card) -> hecs::Entity {
    world.spawn((card,))
}
