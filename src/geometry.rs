use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A point in the host's local coordinate space (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn direction_to(&self, other: Point) -> Vec2 {
        Vec2 {
            dx: other.x - self.x,
            dy: other.y - self.y,
        }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        self.direction_to(other).magnitude()
    }
}

/// A motion vector between two consecutive pointer samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub dx: f32,
    pub dy: f32,
}

impl Vec2 {
    pub fn magnitude(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    pub fn dot(&self, other: &Vec2) -> f32 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Angle between two vectors in `[0, pi]`. `None` when either vector is
    /// degenerate (zero magnitude), where the angle is undefined.
    pub fn angle_to(&self, other: &Vec2) -> Option<f32> {
        let m1 = self.magnitude();
        let m2 = other.magnitude();
        if m1 == 0.0 || m2 == 0.0 {
            return None;
        }
        // Clamp so float error near parallel vectors cannot push acos out of domain
        let cos = (self.dot(other) / (m1 * m2)).clamp(-1.0, 1.0);
        Some(cos.acos())
    }
}

/// Total polyline length of a pointer trail.
pub fn path_length(points: &[Point]) -> f32 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.distance_to(*b))
        .sum()
}
