//! Quarter-turn rotation of 2D vectors.

use crate::float_types::Real;
use nalgebra::{Matrix2, Vector2};

/// Rotation matrix for `quarter_turns · 90°` (counter-clockwise for positive values).
///
/// The entries are picked exactly from {-1, 0, 1} rather than evaluated with
/// `cos`/`sin`, so `rotate(rotate(v, 1), -1) == v` bit for bit.
pub fn quarter_turn_matrix(quarter_turns: i32) -> Matrix2<Real> {
    let (cos, sin) = match quarter_turns.rem_euclid(4) {
        0 => (1.0, 0.0),
        1 => (0.0, 1.0),
        2 => (-1.0, 0.0),
        _ => (0.0, -1.0),
    };
    Matrix2::new(cos, -sin, sin, cos)
}

/// Rotates `vector` by `quarter_turns · 90°`.
#[inline]
pub fn rotate(vector: &Vector2<Real>, quarter_turns: i32) -> Vector2<Real> {
    quarter_turn_matrix(quarter_turns) * vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_quarter_turn_is_counter_clockwise() {
        assert_eq!(rotate(&Vector2::new(1.0, 0.0), 1), Vector2::new(0.0, 1.0));
        assert_eq!(rotate(&Vector2::new(0.0, 1.0), 1), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn negative_quarter_turn_is_clockwise() {
        assert_eq!(rotate(&Vector2::new(1.0, 0.0), -1), Vector2::new(0.0, -1.0));
        assert_eq!(rotate(&Vector2::new(3.0, 4.0), -1), Vector2::new(4.0, -3.0));
    }

    #[test]
    fn full_and_half_turns() {
        let v = Vector2::new(2.5, -7.0);
        assert_eq!(rotate(&v, 4), v);
        assert_eq!(rotate(&v, -4), v);
        assert_eq!(rotate(&v, 2), -v);
        assert_eq!(rotate(&rotate(&v, 1), -1), v);
    }
}
