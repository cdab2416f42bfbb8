//! Static circular obstacle.

use super::{HasPosition, Position, Rgb, SceneObject, SceneView, Shape};

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    position: Position,
    radius: f64,
    color: Rgb,
}

impl Obstacle {
    pub const DEFAULT_RADIUS: f64 = 20.0;

    pub fn new(radius: f64, color: Rgb) -> Self {
        Self {
            position: Position::default(),
            radius,
            color,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS, Rgb::default())
    }
}

impl HasPosition for Obstacle {
    fn position(&self) -> Position {
        self.position
    }
}

impl SceneObject for Obstacle {
    fn update(&mut self, _scene: &SceneView<'_>) {}

    fn shape(&self) -> Shape {
        Shape::Circle {
            position: self.position,
            radius: self.radius,
            color: self.color,
        }
    }

    fn as_positioned(&self) -> Option<&dyn HasPosition> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::Scene;

    #[test]
    fn test_obstacle_update_is_noop() {
        let mut obstacle = Obstacle::default();
        obstacle.set_position(Position::new(3.0, 4.0));
        let before = obstacle.clone();

        let scene = Scene::default();
        obstacle.update(&scene.view());

        assert_eq!(obstacle, before);
    }

    #[test]
    fn test_obstacle_shape() {
        let mut obstacle = Obstacle::default();
        obstacle.set_position(Position::new(400.0, 75.0));
        assert_eq!(
            obstacle.shape(),
            Shape::Circle {
                position: Position::new(400.0, 75.0),
                radius: 20.0,
                color: Rgb(0, 0, 0),
            }
        );
        assert_eq!(
            obstacle.as_positioned().map(|o| o.position()),
            Some(Position::new(400.0, 75.0))
        );
    }

    #[test]
    fn test_obstacle_custom_appearance() {
        let obstacle = Obstacle::new(12.5, Rgb(10, 20, 30));
        assert_eq!(
            obstacle.shape(),
            Shape::Circle {
                position: Position::default(),
                radius: 12.5,
                color: Rgb(10, 20, 30),
            }
        );
    }
}
