//! Spaceship steering itself around obstacles and arena boundaries.
//!
//! The ship senses with a narrow forward cone instead of a real line trace. Whenever the cone
//! finds something close enough, the ship starts a turn by a fixed angle and tweens towards it at
//! a bounded rate per tick. The turn always goes the same way (counterclockwise), no matter on
//! which side the obstacle is.

use std::fmt;

use tracing::{debug, trace, warn};

use super::{
    Angle, ArenaConfig, ArenaError, Boundary, HasPosition, ObjectId, Position, Rgb, SceneObject,
    SceneView, Shape,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Spaceship {
    position: Position,
    rotation: Angle,
    desired_rotation: Option<Angle>,
    arena: ArenaConfig,
    config: SteeringConfig,
}

impl Spaceship {
    pub fn new(rotation: Angle, arena: ArenaConfig, config: SteeringConfig) -> Self {
        Self {
            position: Position::default(),
            rotation,
            desired_rotation: None,
            arena,
            config,
        }
    }

    pub fn state(&self) -> SteeringState {
        match self.desired_rotation {
            Some(_) => SteeringState::Avoiding,
            None => SteeringState::Cruising,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Start (or restart) a turn towards `target`.
    pub fn steer_towards(&mut self, target: Angle) {
        self.desired_rotation = Some(target);
    }

    pub fn distance_to(&self, other: &dyn HasPosition) -> f64 {
        self.position.distance(other.position())
    }

    /// Fails with [`ArenaError::InvalidBoundary`] if `boundary` does not name one of the four
    /// arena edges, e.g. when handed a sensed object.
    pub fn distance_to_boundary<B>(&self, boundary: B) -> Result<f64, ArenaError>
    where
        B: TryInto<Boundary>,
        ArenaError: From<B::Error>,
    {
        let boundary = boundary.try_into()?;
        Ok(self.arena.distance_to_boundary(self.position, boundary))
    }

    /// Looks for the closest object within the sensing cone, or else the first boundary that a
    /// ray of `max_distance` would cross.
    ///
    /// An object inside the cone but beyond `max_distance` hides the boundaries: nothing is
    /// reported for this call.
    ///
    /// The ship never senses itself. During [`Scene::update`](super::Scene::update) the view it
    /// is handed already leaves it out.
    ///
    /// The cone compares bearing and rotation as plain degrees. A ship that has turned past a full
    /// circle no longer senses straight ahead, unless `SteeringConfig::wrap_bearing` is set.
    pub fn ray_cast<'s>(&self, scene: &SceneView<'s>, max_distance: f64) -> Option<Sensed<'s>> {
        let threshold = self.config.ray_angle_threshold.deg();
        let mut closest: Option<(ObjectId, &'s dyn HasPosition, f64)> = None;
        for (id, object) in scene.positioned() {
            let bearing = Angle::bearing(self.position, object.position());
            let offset = if self.config.wrap_bearing {
                bearing.difference(self.rotation)
            } else {
                bearing.deg() - self.rotation.deg()
            };
            if offset.abs() >= threshold {
                continue;
            }

            let distance = self.distance_to(object);
            if closest.map_or(true, |(_, _, d)| distance < d) {
                closest = Some((id, object, distance));
            }
        }

        if let Some((id, object, distance)) = closest {
            return if distance <= max_distance {
                Some(Sensed::Object { id, object })
            } else {
                trace!(%id, distance, "object in sensing cone is out of range");
                None
            };
        }

        let ray_end = self.position + self.rotation.screen_direction() * max_distance;
        self.arena.crossed_boundary(ray_end).map(Sensed::Boundary)
    }

    fn distance_to_sensed(&self, sensed: &Sensed<'_>) -> Result<f64, ArenaError> {
        match sensed {
            Sensed::Object { object, .. } => Ok(self.distance_to(*object)),
            Sensed::Boundary(_) => self.distance_to_boundary(sensed),
        }
    }

    fn turn(&mut self) {
        let Some(desired_rotation) = self.desired_rotation else {
            return;
        };
        let max_turn = self.config.max_turn_angle.deg();

        let delta = desired_rotation.deg() - self.rotation.deg();
        if delta.abs() < max_turn {
            self.finish_turn();
            return;
        }

        self.rotation += Angle::from_deg(max_turn * delta.signum());

        if (desired_rotation.deg() - self.rotation.deg()).abs() < max_turn {
            self.finish_turn();
        }
    }

    fn finish_turn(&mut self) {
        debug!(rotation = self.rotation.deg(), "avoidance turn finished");
        self.desired_rotation = None;
    }

    fn advance(&mut self) {
        let mut step = self.rotation.screen_direction() * self.config.speed;
        if self.config.truncate_motion {
            step = step.map(f64::trunc);
        }
        self.position += step;
    }
}

impl HasPosition for Spaceship {
    fn position(&self) -> Position {
        self.position
    }
}

impl SceneObject for Spaceship {
    fn update(&mut self, scene: &SceneView<'_>) {
        if let Some(sensed) = self.ray_cast(scene, self.config.avoidance_distance) {
            let distance = match self.distance_to_sensed(&sensed) {
                Ok(distance) => distance,
                Err(error) => {
                    warn!(%sensed, %error, "sensed something without a distance");
                    f64::NAN
                }
            };
            let target = self.rotation + self.config.avoidance_angle;
            match self.state() {
                SteeringState::Cruising => {
                    debug!(%sensed, distance, desired = target.deg(), "starting avoidance turn")
                }
                SteeringState::Avoiding => {
                    trace!(%sensed, distance, desired = target.deg(), "refreshing avoidance turn")
                }
            }
            self.steer_towards(target);
        }

        self.turn();
        self.advance();
    }

    fn shape(&self) -> Shape {
        Shape::Ship {
            position: self.position,
            rotation: self.rotation,
            desired_rotation: self.desired_rotation,
            state: self.state(),
            width: self.config.width,
            height: self.config.height,
            color: self.config.color,
        }
    }

    fn as_positioned(&self) -> Option<&dyn HasPosition> {
        Some(self)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SteeringState {
    Cruising,
    Avoiding,
}

/// Result of a successful [`Spaceship::ray_cast`].
#[derive(Clone, Copy)]
pub enum Sensed<'s> {
    Object {
        id: ObjectId,
        object: &'s dyn HasPosition,
    },
    Boundary(Boundary),
}

impl fmt::Display for Sensed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensed::Object { id, .. } => write!(f, "object {id}"),
            Sensed::Boundary(boundary) => write!(f, "{boundary} boundary"),
        }
    }
}

impl fmt::Debug for Sensed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensed::Object { id, object } => f
                .debug_struct("Object")
                .field("id", id)
                .field("position", &object.position())
                .finish(),
            Sensed::Boundary(boundary) => f.debug_tuple("Boundary").field(boundary).finish(),
        }
    }
}

impl TryFrom<&Sensed<'_>> for Boundary {
    type Error = ArenaError;

    fn try_from(value: &Sensed<'_>) -> Result<Self, Self::Error> {
        match value {
            Sensed::Boundary(boundary) => Ok(*boundary),
            Sensed::Object { id, .. } => Err(ArenaError::InvalidBoundary(format!("object {id}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SteeringConfig {
    /// Distance travelled per tick.
    pub speed: f64,
    /// Objects and boundaries closer than this are avoided.
    pub avoidance_distance: f64,
    /// Turn started whenever something is sensed.
    pub avoidance_angle: Angle,
    /// Maximum rotation per tick.
    pub max_turn_angle: Angle,
    /// Half width of the sensing cone.
    pub ray_angle_threshold: Angle,
    /// Round each per-tick displacement component toward zero. Causes a slow drift that
    /// depends on the heading.
    pub truncate_motion: bool,
    /// Wrap the bearing offset into [-180, 180) before the cone test, so the cone keeps working
    /// once the rotation has gone past a full circle.
    pub wrap_bearing: bool,
    // Only required for visualisation
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

impl SteeringConfig {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        speed: f64,
        avoidance_distance: f64,
        avoidance_angle: Angle,
        max_turn_angle: Angle,
        ray_angle_threshold: Angle,
        truncate_motion: bool,
        wrap_bearing: bool,
        width: f64,
        height: f64,
        color: Rgb,
    ) -> Self {
        Self {
            speed,
            avoidance_distance,
            avoidance_angle,
            max_turn_angle,
            ray_angle_threshold,
            truncate_motion,
            wrap_bearing,
            width,
            height,
            color,
        }
    }
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self::new(
            3.0,
            150.0,
            Angle::from_deg(30.0),
            Angle::from_deg(1.0),
            Angle::from_deg(1.0),
            true,
            false,
            20.0,
            30.0,
            Rgb(0, 128, 255),
        )
    }
}
