//! Plain-text rendering of worlds and grids.

use std::fmt::Write;

use field_core::{Grid, SceneGeometry, ShapeRole, World};

/// Intensity ramp, lowest first.
const RAMP: &[u8] = b" .:-=+*#%@";

/// One character per cell, y increasing upward, shaded between the grid's
/// own minimum and maximum.
pub fn shade_map(grid: &Grid) -> String {
    let size = grid.size();
    let (Some(lo), Some(hi)) = (grid.min(), grid.max()) else {
        return String::new();
    };
    let span = (hi - lo).max(1) as f64;
    let top = (RAMP.len() - 1) as f64;

    let mut out = String::with_capacity((size as usize + 1) * size as usize);
    for y in (0..size).rev() {
        for x in 0..size {
            let v = grid.get(x, y).unwrap_or(lo);
            let level = (((v - lo) as f64 / span) * top).round() as usize;
            out.push(RAMP[level.min(RAMP.len() - 1)] as char);
        }
        out.push('\n');
    }
    out
}

pub fn describe_world(world: &World) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "size: {}", world.size());
    let _ = writeln!(out, "obstacles: {}", world.obstacles().len());
    for (i, o) in world.obstacles().iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{i}] {:<6} center=({:.2}, {:.2}) extent={:.2}",
            o.kind.name(),
            o.center.x,
            o.center.y,
            o.extent
        );
    }
    match world.agent_position() {
        Some(p) => {
            let _ = writeln!(out, "agent: ({:.2}, {:.2})", p.x, p.y);
        }
        None => {
            let _ = writeln!(out, "agent: none");
        }
    }
    out
}

pub fn describe_grid(grid: &Grid) -> String {
    match (grid.min(), grid.max(), grid.mean()) {
        (Some(min), Some(max), Some(mean)) => format!("min={min} max={max} mean={mean:.2}"),
        _ => "empty".to_string(),
    }
}

pub fn describe_geometry(geometry: &SceneGeometry) -> String {
    let mut out = String::new();
    for shape in geometry.shapes() {
        let role = match shape.role {
            ShapeRole::Boundary => "boundary".to_string(),
            ShapeRole::Obstacle(kind) => kind.name().to_string(),
            ShapeRole::Agent => "agent".to_string(),
        };
        let _ = writeln!(
            out,
            "  {role:<8} vertices={:<3} area={:.2}",
            shape.polygon.points.len(),
            shape.polygon.area()
        );
    }
    out
}
