use crate::config::ExtentRange;
use crate::{DeterministicRng, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Axis-aligned square; `extent` is the half side.
    Box,
    /// Disc; `extent` is the radius.
    Circle,
}

impl ObstacleKind {
    pub fn sample<R: DeterministicRng + ?Sized>(rng: &mut R) -> Self {
        if rng.next_bool() {
            ObstacleKind::Circle
        } else {
            ObstacleKind::Box
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ObstacleKind::Box => "box",
            ObstacleKind::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub center: Vec2,
    pub extent: f64,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, center: Vec2, extent: f64) -> Self {
        Self {
            kind,
            center,
            extent,
        }
    }

    /// Samples kind, center and extent for a world of side `size`.
    ///
    /// The sampled extent is clamped to the distance from the center to the
    /// nearest world edge, so the footprint never leaves `[0, size]^2`.
    pub fn sample<R: DeterministicRng + ?Sized>(
        size: f64,
        extent: ExtentRange,
        rng: &mut R,
    ) -> Self {
        let kind = ObstacleKind::sample(rng);
        let center = Vec2::new(rng.gen_uniform(0.0, size), rng.gen_uniform(0.0, size));
        let sampled = rng.gen_uniform(extent.min, extent.max);
        let extent = sampled
            .min(center.x)
            .min(center.y)
            .min(size - center.x)
            .min(size - center.y);
        Self::new(kind, center, extent)
    }

    /// Distance from the center under this obstacle's metric.
    pub fn distance_to(&self, p: Vec2) -> f64 {
        match self.kind {
            ObstacleKind::Box => self.center.chebyshev_distance(p),
            ObstacleKind::Circle => self.center.distance(p),
        }
    }

    /// Whether `p` lies strictly inside the obstacle.
    pub fn affects(&self, p: Vec2) -> bool {
        self.distance_to(p) < self.extent
    }

    /// Closed containment test, boundary included.
    pub fn contains(&self, p: Vec2) -> bool {
        self.distance_to(p) <= self.extent
    }

    /// Axis-aligned bounding square as `(min, max)` corners.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::new(self.extent, self.extent);
        (self.center - half, self.center + half)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.center.is_finite() && self.extent.is_finite() && self.extent >= 0.0
    }
}
