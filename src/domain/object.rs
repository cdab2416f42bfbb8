//! Capabilities shared by everything that lives in a scene.

use super::{Angle, Position, Rgb, SceneView, SteeringState};

/// Anything a ship can sense.
pub trait HasPosition {
    fn position(&self) -> Position;
}

pub trait SceneObject: Send + Sync {
    /// Advance by one tick. The view lists every other object in the scene and cannot be
    /// used to change its membership.
    fn update(&mut self, scene: &SceneView<'_>);

    fn shape(&self) -> Shape;

    fn as_positioned(&self) -> Option<&dyn HasPosition> {
        None
    }
}

/// What the render pass needs to know to draw an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle {
        position: Position,
        radius: f64,
        color: Rgb,
    },
    Ship {
        position: Position,
        rotation: Angle,
        desired_rotation: Option<Angle>,
        state: SteeringState,
        width: f64,
        height: f64,
        color: Rgb,
    },
}
