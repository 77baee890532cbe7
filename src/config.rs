//! Configuration constants for the drone simulator.

use macroquad::math::{Vec3, vec3};

// Flight physics
pub const ACCELERATION: f32 = 35.0; // Thrust applied along the requested direction (units/s^2)
pub const FRICTION: f32 = 0.94; // Per-tick velocity damping factor
pub const MAX_SPEED: f32 = 12.0; // Velocity magnitude cap after integration
pub const DRONE_RADIUS: f32 = 0.3; // Collision radius used to inflate obstacle boxes

// Signal link
pub const SPAWN_POINT: Vec3 = vec3(0.0, 2.0, 15.0); // Operator position, also the respawn target
pub const MAX_DISTANCE: f32 = 100.0; // Link range from the spawn point
pub const RESPAWN_DELAY: f64 = 2.0; // Seconds out of range before the drone is pulled back

// Battery
pub const BATTERY_DRAIN_INTERVAL: f64 = 6.0; // Seconds between 1% drops (10 minute flight time)

// Camera
pub const MOUSE_SENSITIVITY: f32 = 0.1; // Degrees of yaw/pitch per mouse pixel
pub const PITCH_LIMIT: f32 = 89.0; // Keeps the view basis away from the vertical singularity

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 1600;
pub const WINDOW_HEIGHT: i32 = 800;
pub const LAMP_INTENSITY: f32 = 35.0; // Lamp brightness when the lights are on
pub const LAMP_COLOR: [f32; 3] = [1.0, 0.9, 0.7]; // Warm white

// HUD layout, in normalized device coordinates
pub const TIMER_ANCHOR: (f32, f32) = (0.60, -0.70); // Lower right corner
pub const TIMER_DIGIT_SIZE: f32 = 0.012; // Digit cell width; cells are twice as tall
pub const TIMER_DIGIT_SPACING: f32 = 0.035; // Horizontal advance between digits
pub const BATTERY_ANCHOR: (f32, f32) = (-0.85, 0.75); // Upper left corner
pub const BATTERY_WIDTH: f32 = 0.08; // Outline body width
pub const BATTERY_HEIGHT: f32 = 0.04; // Outline body height
pub const BATTERY_TIP_WIDTH: f32 = 0.01; // Terminal nub past the right edge
pub const BATTERY_FILL_INSET: f32 = 0.004; // Gap between outline and fill
pub const BATTERY_FILL_EPSILON: f32 = 0.001; // Fill widths below this are omitted

// HUD colors
pub const TIMER_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 0.9];
pub const BATTERY_COLOR: [f32; 4] = [0.2, 1.0, 0.2, 0.9];
