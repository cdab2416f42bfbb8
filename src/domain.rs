//! The domain module encapsulates the core simulation logic. It defines the `Spaceship` and
//! `Obstacle` entities, the `Scene` holding them and the arena they fly in.
//!
//! The module does not depend on the engine used for windowing and rendering. Everything it needs
//! from its surroundings (arena size, steering constants) is passed in as configuration.

mod arena;
mod basis;
mod object;
mod obstacle;
mod scene;
mod spaceship;

pub use arena::{ArenaConfig, ArenaError, Boundary};
pub use basis::{Angle, Position, Rgb};
pub use object::{HasPosition, SceneObject, Shape};
pub use obstacle::Obstacle;
pub use scene::{ObjectId, Scene, SceneView};
pub use spaceship::{Spaceship, SteeringConfig, SteeringState};
