//! Collision detection based on basic shapes.
//!
//! All tests are inclusive: touching shapes count as colliding.

use super::{Position, Vector};

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.shape().has_intersection(&other.shape())
    }

    fn shape(&self) -> Shape;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { position: Position, radius: f64 },
    Segment(LineSegment),
}

impl Shape {
    fn has_intersection(&self, other: &Shape) -> bool {
        match (self, other) {
            (
                Shape::Circle { position, radius },
                Shape::Circle {
                    position: other_position,
                    radius: other_radius,
                },
            ) => circles_overlap(*position, *radius, *other_position, *other_radius),
            (Shape::Circle { position, radius }, Shape::Segment(segment))
            | (Shape::Segment(segment), Shape::Circle { position, radius }) => {
                segment_circle_overlap(segment, *position, *radius)
            }
            // Walls are only ever tested against bodies.
            (Shape::Segment(_), Shape::Segment(_)) => false,
        }
    }

    /// Direction pointing from this shape towards `position`, used as the contact normal when
    /// a circle centered at `position` touches the shape.
    pub fn normal_towards(&self, position: Position) -> Option<Vector> {
        match self {
            Shape::Circle {
                position: center, ..
            } => (position - *center).normalized(),
            Shape::Segment(segment) => (position - segment.closest_point(position))
                .normalized()
                .or_else(|| segment.normal()),
        }
    }
}

pub fn circles_overlap(c_1: Position, r_1: f64, c_2: Position, r_2: f64) -> bool {
    c_1.distance(c_2) <= r_1 + r_2
}

pub fn segment_circle_overlap(segment: &LineSegment, center: Position, radius: f64) -> bool {
    segment.distance(center) <= radius
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LineSegment {
    p1: Position,
    p2: Position,
}

impl LineSegment {
    pub const fn new(p1: Position, p2: Position) -> Self {
        Self { p1, p2 }
    }

    pub fn start(&self) -> Position {
        self.p1
    }

    pub fn end(&self) -> Position {
        self.p2
    }

    /// Point on the segment closest to `position`.
    pub fn closest_point(&self, position: Position) -> Position {
        let direction = self.p2 - self.p1;
        let length_squared = direction.dot(direction);
        if length_squared <= f64::EPSILON {
            return self.p1;
        }
        let t = ((position - self.p1).dot(direction) / length_squared).clamp(0.0, 1.0);
        self.p1 + direction * t
    }

    pub fn distance(&self, position: Position) -> f64 {
        position.distance(self.closest_point(position))
    }

    /// Unit vector perpendicular to the segment, `None` for a degenerate segment.
    pub fn normal(&self) -> Option<Vector> {
        let direction = self.p2 - self.p1;
        Vector::new(-direction.y(), direction.x()).normalized()
    }
}
