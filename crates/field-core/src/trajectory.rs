use crate::config::TrajectoryConfig;
use crate::error::Result;
use crate::{DeterministicRng, Vec2, World};

/// Biased random walk of the agent through a fixed obstacle layout.
///
/// A direction sign is drawn once per trajectory; every step then moves the
/// agent by `delta_t * control`, where each control component is uniform in
/// `[0, step_size)` times that sign. Positions are never clamped, so the agent
/// may walk out of the world square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryGenerator {
    config: TrajectoryConfig,
}

impl Default for TrajectoryGenerator {
    fn default() -> Self {
        Self {
            config: TrajectoryConfig::default(),
        }
    }
}

impl TrajectoryGenerator {
    pub fn new(config: TrajectoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> TrajectoryConfig {
        self.config
    }

    /// Returns `length` snapshots of `root`, each sharing its obstacles. The
    /// root itself is not part of the output.
    pub fn generate<R: DeterministicRng + ?Sized>(
        &self,
        root: &World,
        length: usize,
        rng: &mut R,
    ) -> Vec<World> {
        let direction = Vec2::new(rng.gen_sign(), rng.gen_sign());
        tracing::debug!(
            length,
            dx = direction.x,
            dy = direction.y,
            "generating trajectory"
        );

        let mut snapshots: Vec<World> = Vec::with_capacity(length);
        for _ in 0..length {
            let current = snapshots.last().unwrap_or(root);
            let control = Vec2::new(
                rng.gen_uniform(0.0, self.config.step_size),
                rng.gen_uniform(0.0, self.config.step_size),
            )
            .mul_elem(direction);
            let next = current.sampled_agent_position() + control * self.config.delta_t;
            let snapshot = current.with_agent_position(next);
            snapshots.push(snapshot);
        }
        snapshots
    }
}

/// [`TrajectoryGenerator::generate`] with the default step size and delta-t.
pub fn generate_trajectory<R: DeterministicRng + ?Sized>(
    root: &World,
    length: usize,
    rng: &mut R,
) -> Vec<World> {
    TrajectoryGenerator::default().generate(root, length, rng)
}
