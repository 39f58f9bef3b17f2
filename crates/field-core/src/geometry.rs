//! Polygon shapes for drawing a world.
//!
//! Purely presentational: nothing here feeds back into field evaluation.

use crate::{Obstacle, ObstacleKind, Vec2, World};

/// Segments used to approximate a disc.
pub const CIRCLE_SEGMENTS: usize = 64;

/// A simple closed polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Axis-aligned square centered on `center`.
    pub fn square(center: Vec2, half: f64) -> Self {
        Self::rect(
            Vec2::new(center.x - half, center.y - half),
            Vec2::new(center.x + half, center.y + half),
        )
    }

    /// Counter-clockwise rectangle spanning `min..max`.
    pub fn rect(min: Vec2, max: Vec2) -> Self {
        Self::new(vec![
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
            Vec2::new(min.x, min.y),
        ])
    }

    /// Regular `segments`-gon inscribed in the circle.
    pub fn disc(center: Vec2, radius: f64, segments: usize) -> Self {
        let segments = segments.max(3);
        let step = std::f64::consts::TAU / segments as f64;
        let points = (0..segments)
            .map(|i| {
                let a = step * i as f64;
                Vec2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
            })
            .collect();
        Self::new(points)
    }

    /// Unsigned area (shoelace formula).
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() * 0.5
    }

    /// Even-odd point-in-polygon test.
    pub fn contains(&self, p: Vec2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    Boundary,
    Obstacle(ObstacleKind),
    Agent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub role: ShapeRole,
    pub polygon: Polygon,
}

/// Drawable shapes of one world.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGeometry {
    pub boundary: Polygon,
    /// Same order as the world's obstacles.
    pub obstacles: Vec<Shape>,
    /// Present iff the world includes the agent.
    pub agent: Option<Polygon>,
}

impl SceneGeometry {
    pub fn build(world: &World) -> Self {
        let size = world.size() as f64;
        let boundary = Polygon::rect(Vec2::ZERO, Vec2::new(size, size));
        let obstacles = world.obstacles().iter().map(obstacle_shape).collect();
        let agent = world
            .agent_position()
            .map(|p| Polygon::square(p, world.agent_half_extent()));
        Self {
            boundary,
            obstacles,
            agent,
        }
    }

    /// Every shape in draw order: boundary, obstacles, agent.
    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        let boundary = Shape {
            role: ShapeRole::Boundary,
            polygon: self.boundary.clone(),
        };
        let agent = self.agent.clone().map(|polygon| Shape {
            role: ShapeRole::Agent,
            polygon,
        });
        std::iter::once(boundary)
            .chain(self.obstacles.iter().cloned())
            .chain(agent)
    }
}

fn obstacle_shape(obstacle: &Obstacle) -> Shape {
    let polygon = match obstacle.kind {
        ObstacleKind::Box => Polygon::square(obstacle.center, obstacle.extent),
        ObstacleKind::Circle => Polygon::disc(obstacle.center, obstacle.extent, CIRCLE_SEGMENTS),
    };
    Shape {
        role: ShapeRole::Obstacle(obstacle.kind),
        polygon,
    }
}
