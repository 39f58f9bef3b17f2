use std::sync::{Arc, OnceLock};

use crate::config::{FieldConfig, WorldConfig};
use crate::error::{FieldError, Result};
use crate::geometry::SceneGeometry;
use crate::{DeterministicRng, Grid, Obstacle, Vec2};

/// One sampled scene: obstacles plus an optional agent over `[0, size]^2`.
///
/// Obstacles live in a reference-counted buffer. Snapshots derived with
/// [`World::with_agent_position`] point at the same buffer, so a trajectory
/// costs O(1) obstacle memory per snapshot. Nothing mutates a world after
/// construction except the build-once `grid` and `geometry` caches.
#[derive(Debug, Clone)]
pub struct World {
    size: u32,
    include_agent: bool,
    agent_position: Vec2,
    agent_half_extent: f64,
    field: FieldConfig,
    obstacles: Arc<[Obstacle]>,
    grid: OnceLock<Grid>,
    geometry: OnceLock<SceneGeometry>,
}

/// The three additive terms of the intensity field at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub world: f64,
    pub obstacle: f64,
    pub agent: f64,
}

impl FieldSample {
    pub fn total(&self) -> f64 {
        self.world + self.obstacle + self.agent
    }

    /// Total truncated toward zero.
    pub fn value(&self) -> i32 {
        self.total() as i32
    }
}

impl World {
    /// Samples a root world with the default ranges and field constants.
    pub fn create<R: DeterministicRng + ?Sized>(
        size: u32,
        include_agent: bool,
        rng: &mut R,
    ) -> Result<Self> {
        let config = WorldConfig {
            size,
            include_agent,
            ..WorldConfig::default()
        };
        Self::generate(&config, FieldConfig::default(), rng)
    }

    pub fn generate<R: DeterministicRng + ?Sized>(
        config: &WorldConfig,
        field: FieldConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let size = config.size as f64;

        let count = rng.gen_range_u32(config.obstacle_count.low..config.obstacle_count.high);
        let mut obstacles = Vec::with_capacity(count as usize);
        for index in 0..count {
            let obstacle = Obstacle::sample(size, config.extent, &mut *rng);
            tracing::trace!(
                index,
                kind = obstacle.kind.name(),
                x = obstacle.center.x,
                y = obstacle.center.y,
                extent = obstacle.extent,
                "sampled obstacle"
            );
            obstacles.push(obstacle);
        }

        // Drawn even without an agent so the random stream does not depend on the flag.
        let agent_position = Vec2::new(rng.gen_uniform(0.0, size), rng.gen_uniform(0.0, size));

        tracing::debug!(
            size = config.size,
            obstacles = obstacles.len(),
            include_agent = config.include_agent,
            "sampled world"
        );

        Ok(Self {
            size: config.size,
            include_agent: config.include_agent,
            agent_position,
            agent_half_extent: config.agent_half_extent,
            field,
            obstacles: obstacles.into(),
            grid: OnceLock::new(),
            geometry: OnceLock::new(),
        })
    }

    /// Builds a world from explicit obstacles.
    ///
    /// Extents are taken as given; unlike sampling, nothing is clamped to the
    /// world square. Without an agent the stored position is the world center.
    pub fn from_parts(size: u32, obstacles: Vec<Obstacle>, agent: Option<Vec2>) -> Result<Self> {
        if size == 0 {
            return Err(FieldError::InvalidSize(size));
        }
        if let Some((index, obstacle)) = obstacles.iter().enumerate().find(|(_, o)| !o.is_valid())
        {
            return Err(FieldError::InvalidObstacle {
                index,
                extent: obstacle.extent,
            });
        }
        let half = size as f64 / 2.0;
        Ok(Self {
            size,
            include_agent: agent.is_some(),
            agent_position: agent.unwrap_or(Vec2::new(half, half)),
            agent_half_extent: WorldConfig::default().agent_half_extent,
            field: FieldConfig::default(),
            obstacles: obstacles.into(),
            grid: OnceLock::new(),
            geometry: OnceLock::new(),
        })
    }

    /// Replaces the field constants. Cached grid and geometry are dropped.
    pub fn with_field_config(self, field: FieldConfig) -> Self {
        Self {
            field,
            grid: OnceLock::new(),
            geometry: OnceLock::new(),
            ..self
        }
    }

    /// A snapshot sharing this world's obstacles, with the agent moved to
    /// `position` and always included.
    pub fn with_agent_position(&self, position: Vec2) -> Self {
        Self {
            size: self.size,
            include_agent: true,
            agent_position: position,
            agent_half_extent: self.agent_half_extent,
            field: self.field,
            obstacles: Arc::clone(&self.obstacles),
            grid: OnceLock::new(),
            geometry: OnceLock::new(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        let half = self.size as f64 / 2.0;
        Vec2::new(half, half)
    }

    pub fn includes_agent(&self) -> bool {
        self.include_agent
    }

    /// The agent position, if the agent takes part in the field.
    pub fn agent_position(&self) -> Option<Vec2> {
        self.include_agent.then_some(self.agent_position)
    }

    /// The stored agent position, whether or not the agent is included.
    pub fn sampled_agent_position(&self) -> Vec2 {
        self.agent_position
    }

    pub fn agent_half_extent(&self) -> f64 {
        self.agent_half_extent
    }

    pub fn field_config(&self) -> FieldConfig {
        self.field
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn shared_obstacles(&self) -> &Arc<[Obstacle]> {
        &self.obstacles
    }

    /// The three field terms at `position`. Coordinates outside the world
    /// are evaluated by the same formulas.
    pub fn field_at(&self, position: Vec2) -> FieldSample {
        let f = &self.field;

        let world = f.world_peak - self.center().chebyshev_distance(position) * f.world_gradient;

        // Only the nearest obstacle containing the position counts.
        let nearest = self
            .obstacles
            .iter()
            .filter_map(|o| {
                let d = o.distance_to(position);
                (d < o.extent).then_some(d)
            })
            .reduce(f64::min);
        let obstacle = nearest.map_or(0.0, |d| f.obstacle_peak - f.obstacle_gradient * d);

        let agent = match self.agent_position() {
            Some(agent) => {
                let d = agent.chebyshev_distance(position);
                if d <= self.agent_half_extent {
                    f.agent_peak - f.agent_gradient * d
                } else {
                    0.0
                }
            }
            None => 0.0,
        };

        FieldSample {
            world,
            obstacle,
            agent,
        }
    }

    pub fn value_at(&self, position: Vec2) -> i32 {
        self.field_at(position).value()
    }

    /// Evaluates the field on every integer coordinate, bypassing the cache.
    pub fn rasterize(&self) -> Grid {
        tracing::trace!(size = self.size, "rasterizing world");
        Grid::from_fn(self.size, |x, y| self.value_at(Vec2::new(x as f64, y as f64)))
    }

    /// The rasterized field, computed on first access.
    pub fn grid(&self) -> &Grid {
        self.grid.get_or_init(|| self.rasterize())
    }

    /// Drawable shapes, built on first access.
    pub fn geometry(&self) -> &SceneGeometry {
        self.geometry.get_or_init(|| SceneGeometry::build(self))
    }
}
