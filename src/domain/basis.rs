//! Basic building blocks.

use std::ops::{Add, AddAssign, Sub};

use nalgebra::Vector2;

/// Point in arena space. The origin is the top left corner of the arena and y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        (self.to_vector() - position.to_vector()).norm()
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Position {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Position> for (f32, f32) {
    fn from(value: Position) -> Self {
        (value.x as f32, value.y as f32)
    }
}

impl From<Position> for (f64, f64) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

impl Add<Vector2<f64>> for Position {
    type Output = Position;

    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign<Vector2<f64>> for Position {
    fn add_assign(&mut self, rhs: Vector2<f64>) {
        *self = *self + rhs;
    }
}

impl Sub for Position {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.to_vector() - rhs.to_vector()
    }
}

/// Rotation in degrees, counterclockwise from north (screen up).
///
/// The value is never wrapped. A ship that keeps turning the same way accumulates rotation
/// beyond 360 degrees; only [`Angle::normalized_deg`] reduces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn from_deg(degree: f64) -> Self {
        Self(degree)
    }

    pub fn from_rad(radians: f64) -> Self {
        Self(radians.to_degrees())
    }

    pub fn deg(self) -> f64 {
        self.0
    }

    pub fn rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn normalized_deg(self) -> f64 {
        self.0.rem_euclid(360.0)
    }

    /// Signed difference `self - other`, wrapped into [-180, 180).
    pub fn difference(self, other: Angle) -> f64 {
        (self.0 - other.0 + 180.0).rem_euclid(360.0) - 180.0
    }

    /// Unit vector pointing along this rotation in screen coordinates.
    pub fn screen_direction(self) -> Vector2<f64> {
        let (sin, cos) = self.rad().sin_cos();
        Vector2::new(-sin, -cos)
    }

    /// Rotation at which `to` lies as seen from `from`.
    pub fn bearing(from: Position, to: Position) -> Self {
        let delta_x = to.x() - from.x();
        let delta_y_up = from.y() - to.y();
        Self::from_rad(delta_y_up.atan2(delta_x)) + Angle::from_deg(-90.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

impl From<Angle> for f32 {
    fn from(value: Angle) -> Self {
        value.0 as f32
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[test]
    fn test_position_distance() {
        assert_abs_diff_eq!(
            Position::new(1.0, 1.0).distance(Position::new(4.0, 5.0)),
            5.0
        );
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(360.0, 0.0)]
    #[case(390.0, 30.0)]
    #[case(-30.0, 330.0)]
    #[case(-720.0, 0.0)]
    fn test_angle_normalized_deg(#[case] degree: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(Angle::from_deg(degree).normalized_deg(), expected);
    }

    #[rstest]
    #[case(10.0, 0.0, 10.0)]
    #[case(0.0, 10.0, -10.0)]
    #[case(359.5, 0.0, -0.5)]
    #[case(0.0, 359.5, 0.5)]
    #[case(-90.0, 270.0, 0.0)]
    fn test_angle_difference(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(
            Angle::from_deg(a).difference(Angle::from_deg(b)),
            expected,
            epsilon = EPSILON
        );
    }

    #[rstest]
    #[case::north(0.0, (0.0, -1.0))]
    #[case::west(90.0, (-1.0, 0.0))]
    #[case::south(180.0, (0.0, 1.0))]
    #[case::east(270.0, (1.0, 0.0))]
    fn test_angle_screen_direction(#[case] degree: f64, #[case] expected: (f64, f64)) {
        let direction = Angle::from_deg(degree).screen_direction();
        assert_abs_diff_eq!(direction.x, expected.0, epsilon = EPSILON);
        assert_abs_diff_eq!(direction.y, expected.1, epsilon = EPSILON);
    }

    #[rstest]
    #[case::ahead(Position::new(0.0, -10.0), 0.0)]
    #[case::left(Position::new(-10.0, 0.0), 90.0)]
    #[case::right(Position::new(10.0, 0.0), -90.0)]
    #[case::behind(Position::new(0.0, 10.0), -180.0)]
    fn test_angle_bearing(#[case] target: Position, #[case] expected: f64) {
        let bearing = Angle::bearing(Position::default(), target);
        assert_abs_diff_eq!(bearing, Angle::from_deg(expected), epsilon = EPSILON);
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }

    impl AbsDiffEq for Angle {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.0, &other.0, epsilon)
        }
    }
}
