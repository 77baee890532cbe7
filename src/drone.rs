use crate::bounds::ObstacleSet;
use crate::camera::FlightCamera;
use crate::config::{
    ACCELERATION, DRONE_RADIUS, FRICTION, MAX_DISTANCE, MAX_SPEED, RESPAWN_DELAY, SPAWN_POINT,
};
use crate::input::FlightInput;
use macroquad::math::Vec3;

// Link state between the drone and the operator at the spawn point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalStatus {
    Connected,
    SignalLost { since: f64 }, // App-clock second the link dropped
}

// Mutable per-tick drone state. Position lives on the flight camera.
#[derive(Debug, Clone)]
pub struct DroneState {
    pub velocity: Vec3,
    pub signal: SignalStatus,
    pub lights_on: bool,
    pub thermal_on: bool,
}

impl Default for DroneState {
    fn default() -> Self {
        DroneState {
            velocity: Vec3::ZERO,
            signal: SignalStatus::Connected,
            lights_on: true,
            thermal_on: false,
        }
    }
}

impl DroneState {
    pub fn new() -> Self {
        Self::default()
    }

    // Advances velocity and position by one tick.
    //
    // The direction basis comes from the camera: forward/back follow the full
    // view direction (including pitch), strafe follows the right vector and
    // climb is along world Y. A blocked move zeroes velocity and leaves the
    // position untouched for the tick; ghost mode skips the obstacle test.
    pub fn integrate(
        &mut self,
        camera: &mut FlightCamera,
        input: &FlightInput,
        dt: f32,
        obstacles: &ObstacleSet,
    ) {
        // A zero or backwards clock tick contributes no thrust and no motion
        let dt = dt.max(0.0);

        // 1. Accumulate the requested direction from the active inputs
        let mut direction = Vec3::ZERO;
        if input.forward {
            direction += camera.front();
        }
        if input.back {
            direction -= camera.front();
        }
        if input.right {
            direction += camera.right();
        }
        if input.left {
            direction -= camera.right();
        }
        if input.up {
            direction += Vec3::Y;
        }
        if input.down {
            direction -= Vec3::Y;
        }

        if direction.length_squared() > 0.0 {
            self.velocity += direction.normalize() * ACCELERATION * dt;
        }

        // 2. Cap speed, preserving direction
        let speed = self.velocity.length();
        if speed > MAX_SPEED {
            self.velocity = self.velocity / speed * MAX_SPEED;
        }

        // 3. Friction is per tick, an exponential decay toward rest
        self.velocity *= FRICTION;

        // 4. Candidate position for this tick
        let candidate = camera.position + self.velocity * dt;

        // 5. Reject the move outright on any obstacle overlap
        if !input.ghost && obstacles.blocks(candidate, DRONE_RADIUS) {
            crate::debug_flight!(
                "move to ({:.2}, {:.2}, {:.2}) blocked, velocity zeroed",
                candidate.x,
                candidate.y,
                candidate.z
            );
            self.velocity = Vec3::ZERO;
            return;
        }

        // 6. Commit
        camera.position = candidate;
    }

    // Re-evaluates the link every tick. Out of range starts the respawn
    // timer; coming back in range cancels it; staying out past the delay
    // teleports the drone home and zeroes velocity.
    pub fn update_signal(&mut self, camera: &mut FlightCamera, now: f64) {
        let distance = camera.position.distance(SPAWN_POINT);

        match self.signal {
            SignalStatus::Connected => {
                if distance > MAX_DISTANCE {
                    self.signal = SignalStatus::SignalLost { since: now };
                    log::warn!("Signal lost {:.1} units from spawn", distance);
                }
            }
            SignalStatus::SignalLost { since } => {
                if distance <= MAX_DISTANCE {
                    // Back in range before the timeout, no respawn
                    self.signal = SignalStatus::Connected;
                    log::info!("Signal reacquired at {:.1} units", distance);
                } else if now - since >= RESPAWN_DELAY {
                    camera.position = SPAWN_POINT;
                    self.velocity = Vec3::ZERO;
                    self.signal = SignalStatus::Connected;
                    log::info!("Link timed out, drone recalled to spawn");
                } else {
                    crate::debug_signal!(
                        "signal lost for {:.2}s at {:.1} units",
                        now - since,
                        distance
                    );
                }
            }
        }
    }

    pub fn is_signal_lost(&self) -> bool {
        matches!(self.signal, SignalStatus::SignalLost { .. })
    }

    pub fn toggle_lights(&mut self) {
        self.lights_on = !self.lights_on;
        log::info!("Lights {}", if self.lights_on { "on" } else { "off" });
    }

    pub fn toggle_thermal(&mut self) {
        self.thermal_on = !self.thermal_on;
        log::info!(
            "Thermal vision {}",
            if self.thermal_on { "on" } else { "off" }
        );
    }
}
