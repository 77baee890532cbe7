//! Static collision volumes derived from scene geometry.

use crate::scene::MeshGroup;
use macroquad::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    // Per-axis min/max fold over the group's vertices. None for an empty slice.
    pub fn from_vertices(vertices: &[Vec3]) -> Option<Aabb> {
        let (first, rest) = vertices.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for v in rest {
            min = min.min(*v);
            max = max.max(*v);
        }
        Some(Aabb { min, max })
    }

    // Interval overlap on all three axes, with the box grown by `radius`.
    // Touching exactly at the inflated boundary does not count as overlap.
    pub fn contains_inflated(&self, point: Vec3, radius: f32) -> bool {
        point.x > self.min.x - radius
            && point.x < self.max.x + radius
            && point.y > self.min.y - radius
            && point.y < self.max.y + radius
            && point.z > self.min.z - radius
            && point.z < self.max.z + radius
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

// One box per obstacle mesh group. Runs once before the simulation loop.
pub fn extract_obstacles(groups: &[MeshGroup]) -> Vec<Aabb> {
    let mut boxes = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        debug_assert!(!group.vertices.is_empty(), "obstacle group {} is empty", index);
        match Aabb::from_vertices(&group.vertices) {
            Some(aabb) => boxes.push(aabb),
            None => log::warn!("Skipping empty obstacle mesh group {}", index),
        }
    }
    boxes
}

// One centroid per lamp mesh group, the arithmetic mean of its vertices.
pub fn extract_lamp_centroids(groups: &[MeshGroup]) -> Vec<Vec3> {
    let mut centroids = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        debug_assert!(!group.vertices.is_empty(), "lamp group {} is empty", index);
        if group.vertices.is_empty() {
            log::warn!("Skipping empty lamp mesh group {}", index);
            continue;
        }
        let sum: Vec3 = group.vertices.iter().copied().sum();
        centroids.push(sum / group.vertices.len() as f32);
    }
    centroids
}

// The set the integrator collides against. Point queries only, so the scan
// strategy can change here without touching the flight code.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    boxes: Vec<Aabb>,
}

impl ObstacleSet {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        ObstacleSet { boxes }
    }

    // Linear scan, first hit short-circuits. Order never changes the answer.
    pub fn blocks(&self, point: Vec3, radius: f32) -> bool {
        self.boxes.iter().any(|b| b.contains_inflated(point, radius))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
