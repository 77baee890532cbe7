use crate::config::SPAWN_POINT;
use ::rand::prelude::*;
use macroquad::math::{Vec3, vec3};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{kind} mesh group {index} has no vertices")]
    EmptyMeshGroup { kind: &'static str, index: usize },
}

// One renderable/collidable vertex collection, the unit the extractor works on
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGroup {
    pub vertices: Vec<Vec3>,
}

impl MeshGroup {
    // Eight corner vertices of an axis-aligned box
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        let mut vertices = Vec::with_capacity(8);
        for sx in [-0.5, 0.5] {
            for sy in [-0.5, 0.5] {
                for sz in [-0.5, 0.5] {
                    vertices.push(center + size * vec3(sx, sy, sz));
                }
            }
        }
        MeshGroup { vertices }
    }
}

// Static scene geometry, split into collidable obstacles and lamp markers
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGeometry {
    pub obstacles: Vec<MeshGroup>,
    pub lamps: Vec<MeshGroup>,
}

impl SceneGeometry {
    // Boundary validation: extraction assumes every group has at least one vertex
    pub fn new(obstacles: Vec<MeshGroup>, lamps: Vec<MeshGroup>) -> Result<Self, SceneError> {
        for (index, group) in obstacles.iter().enumerate() {
            if group.vertices.is_empty() {
                return Err(SceneError::EmptyMeshGroup {
                    kind: "obstacle",
                    index,
                });
            }
        }
        for (index, group) in lamps.iter().enumerate() {
            if group.vertices.is_empty() {
                return Err(SceneError::EmptyMeshGroup {
                    kind: "lamp",
                    index,
                });
            }
        }
        Ok(SceneGeometry { obstacles, lamps })
    }
}

const FLOOR_EXTENT: f32 = 60.0; // Facility footprint, walls sit at +/- half of this
const WALL_HEIGHT: f32 = 6.0;
const CRATE_COUNT: usize = 14;
const SPAWN_CLEARANCE: f32 = 4.0; // No crates this close to the spawn point (XZ)

// Builds the procedural facility: floor, perimeter walls, column grid,
// rng-scattered crates and a grid of ceiling-height lamp markers.
pub fn build_facility(seed: u64) -> Result<SceneGeometry, SceneError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut obstacles = Vec::new();

    // Floor slab, top face at y = 0
    obstacles.push(MeshGroup::cuboid(
        vec3(0.0, -0.25, 0.0),
        vec3(FLOOR_EXTENT, 0.5, FLOOR_EXTENT),
    ));

    // Perimeter walls, open at the top so the drone can leave the facility
    let half = FLOOR_EXTENT / 2.0;
    let wall_y = WALL_HEIGHT / 2.0;
    for (center, size) in [
        (vec3(0.0, wall_y, -half), vec3(FLOOR_EXTENT + 0.5, WALL_HEIGHT, 0.5)),
        (vec3(0.0, wall_y, half), vec3(FLOOR_EXTENT + 0.5, WALL_HEIGHT, 0.5)),
        (vec3(-half, wall_y, 0.0), vec3(0.5, WALL_HEIGHT, FLOOR_EXTENT + 0.5)),
        (vec3(half, wall_y, 0.0), vec3(0.5, WALL_HEIGHT, FLOOR_EXTENT + 0.5)),
    ] {
        obstacles.push(MeshGroup::cuboid(center, size));
    }

    // Column grid
    for gx in [-18.0f32, -6.0, 6.0, 18.0] {
        for gz in [-18.0f32, -6.0, 6.0, 18.0] {
            obstacles.push(MeshGroup::cuboid(
                vec3(gx, WALL_HEIGHT / 2.0, gz),
                vec3(1.2, WALL_HEIGHT, 1.2),
            ));
        }
    }

    // Scattered crates, resting on the floor, kept away from the spawn point
    let mut placed = 0;
    while placed < CRATE_COUNT {
        let x = rng.gen_range(-half + 2.0..half - 2.0);
        let z = rng.gen_range(-half + 2.0..half - 2.0);
        let dx = x - SPAWN_POINT.x;
        let dz = z - SPAWN_POINT.z;
        if (dx * dx + dz * dz).sqrt() < SPAWN_CLEARANCE {
            continue;
        }
        let w = rng.gen_range(0.8..2.4);
        let h = rng.gen_range(0.8..2.4);
        let d = rng.gen_range(0.8..2.4);
        obstacles.push(MeshGroup::cuboid(vec3(x, h / 2.0, z), vec3(w, h, d)));
        placed += 1;
    }

    // Lamp markers just below wall-top height; their centroids become light positions
    let mut lamps = Vec::new();
    for gx in [-20.0f32, 0.0, 20.0] {
        for gz in [-20.0f32, 0.0, 20.0] {
            lamps.push(MeshGroup::cuboid(
                vec3(gx, WALL_HEIGHT - 0.4, gz),
                vec3(0.3, 0.3, 0.3),
            ));
        }
    }

    crate::debug_scene!(
        "facility built: {} obstacle groups, {} lamp groups (seed {})",
        obstacles.len(),
        lamps.len(),
        seed
    );
    SceneGeometry::new(obstacles, lamps)
}
