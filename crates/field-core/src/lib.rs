//! Deterministic obstacle worlds, intensity fields and agent trajectories.
//!
//! A [`World`] is a square scene with randomly placed boxes and circles and an
//! optional agent. It maps any 2-D position to an integer intensity and can
//! rasterize that field over its integer grid. [`TrajectoryGenerator`] walks
//! the agent through a fixed layout, producing snapshots that share obstacles.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod obstacle;
pub mod rng;
pub mod trajectory;
pub mod world;

pub use config::{
    CountRange, ExtentRange, FieldConfig, GeneratorConfig, TrajectoryConfig, WorldConfig,
};
pub use error::{FieldError, Result};
pub use geometry::{Polygon, SceneGeometry, Shape, ShapeRole};
pub use grid::Grid;
pub use math::Vec2;
pub use obstacle::{Obstacle, ObstacleKind};
pub use rng::{derive_seed, DeterministicRng, SplitMix64};
pub use trajectory::{generate_trajectory, TrajectoryGenerator};
pub use world::{FieldSample, World};
