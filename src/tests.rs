//! Test utils.

use crate::domain::{
    Angle, ArenaConfig, ObjectId, Obstacle, Position, Scene, Shape, Spaceship, SteeringConfig,
};

pub fn arena() -> ArenaConfig {
    ArenaConfig::new(800.0, 600.0)
}

pub fn ship_at(x: f64, y: f64, rotation: f64) -> Spaceship {
    let mut ship = Spaceship::new(Angle::from_deg(rotation), arena(), SteeringConfig::default());
    ship.set_position(Position::new(x, y));
    ship
}

pub fn obstacle_at(x: f64, y: f64) -> Obstacle {
    let mut obstacle = Obstacle::default();
    obstacle.set_position(Position::new(x, y));
    obstacle
}

pub fn shape_of(scene: &Scene, id: ObjectId) -> Option<Shape> {
    scene
        .enumerate()
        .find(|(other, _)| *other == id)
        .map(|(_, object)| object.shape())
}
