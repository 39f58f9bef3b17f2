//! Generator configuration loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

/// Top-level generator configuration, usually loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Scene sampling parameters
    pub world: WorldConfig,

    /// Intensity field constants
    pub field: FieldConfig,

    /// Agent random-walk parameters
    pub trajectory: TrajectoryConfig,
}

/// Parameters for sampling a root world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square world
    pub size: u32,

    /// Whether the agent contributes to the field
    pub include_agent: bool,

    /// Obstacle count, sampled from `[low, high)`
    pub obstacle_count: CountRange,

    /// Radius (circle) or half side (box), sampled from `[min, max]` before clamping
    pub extent: ExtentRange,

    /// Half width of the agent's square footprint
    pub agent_half_extent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub low: u32,
    pub high: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtentRange {
    pub min: f64,
    pub max: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 32,
            include_agent: true,
            obstacle_count: CountRange { low: 2, high: 7 },
            extent: ExtentRange { min: 2.0, max: 8.0 },
            agent_half_extent: 0.5,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(FieldError::InvalidSize(self.size));
        }
        let CountRange { low, high } = self.obstacle_count;
        if low >= high {
            return Err(FieldError::EmptyObstacleRange { low, high });
        }
        let ExtentRange { min, max } = self.extent;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(FieldError::InvalidExtentRange { min, max });
        }
        if !self.agent_half_extent.is_finite() || self.agent_half_extent < 0.0 {
            return Err(FieldError::InvalidAgentHalfExtent(self.agent_half_extent));
        }
        Ok(())
    }
}

/// Peak values and linear fall-off rates of the three field terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub world_peak: f64,
    pub world_gradient: f64,
    pub obstacle_peak: f64,
    pub obstacle_gradient: f64,
    pub agent_peak: f64,
    pub agent_gradient: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            world_peak: 30.0,
            world_gradient: 1.0,
            obstacle_peak: 70.0,
            obstacle_gradient: 2.0,
            agent_peak: 50.0,
            agent_gradient: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Upper bound (exclusive) of each control component
    pub step_size: f64,

    /// Integration step applied to the control vector
    pub delta_t: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            step_size: 3.0,
            delta_t: 1.0,
        }
    }
}

impl TrajectoryConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(FieldError::InvalidStepSize(self.step_size));
        }
        if !self.delta_t.is_finite() {
            return Err(FieldError::InvalidDeltaT(self.delta_t));
        }
        Ok(())
    }
}

impl GeneratorConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            size = config.world.size,
            "loaded generator config"
        );
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.world.validate()?;
        self.trajectory.validate()
    }
}
