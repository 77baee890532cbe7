use crate::battery::Battery;
use crate::bounds::{ObstacleSet, extract_lamp_centroids, extract_obstacles};
use crate::camera::FlightCamera;
use crate::config::SPAWN_POINT;
use crate::drone::DroneState;
use crate::hud::Hud;
use crate::input::{EdgeDetector, FlightInput};
use crate::render::Renderer;
use crate::scene::{SceneGeometry, build_facility};
use log::info;
use macroquad::prelude::{
    KeyCode, Vec3, get_frame_time, get_time, is_key_down, mouse_position, next_frame,
    set_cursor_grab, show_mouse,
};

/// The Game struct encapsulates the state and logic for running a patrol flight
pub struct Game {
    pub scene: SceneGeometry,
    pub obstacles: ObstacleSet,
    pub lamps: Vec<Vec3>,
    pub camera: FlightCamera,
    pub drone: DroneState,
    pub battery: Battery,
    pub hud: Hud,
    lights_edge: EdgeDetector,
    thermal_edge: EdgeDetector,
    start_time: f64,
}

impl Game {
    /// Create a new flight session over a freshly generated facility
    pub fn new(seed: u64, now: f64) -> Result<Self, Box<dyn std::error::Error>> {
        let scene = build_facility(seed)?;
        let obstacles = ObstacleSet::new(extract_obstacles(&scene.obstacles));
        let lamps = extract_lamp_centroids(&scene.lamps);
        info!(
            "Facility generated with seed {}: {} obstacle groups, {} lamps.",
            seed,
            obstacles.len(),
            lamps.len()
        );

        Ok(Game {
            scene,
            obstacles,
            lamps,
            camera: FlightCamera::new(SPAWN_POINT),
            drone: DroneState::new(),
            battery: Battery::new(now),
            hud: Hud::new(),
            lights_edge: EdgeDetector::default(),
            thermal_edge: EdgeDetector::default(),
            start_time: now,
        })
    }

    /// Run the main flight loop using the provided renderer
    pub async fn run(&mut self, renderer: &mut Renderer) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting flight loop...");
        info!(
            "Controls: WASD + Space/LShift to fly, mouse to look, L lights, T thermal, ESC quits."
        );

        set_cursor_grab(true);
        show_mouse(false);

        while !Renderer::window_should_close() {
            let input = FlightInput::poll();
            self.camera.track_mouse(mouse_position().into());

            if self.lights_edge.rising(is_key_down(KeyCode::L)) {
                self.drone.toggle_lights();
            }
            if self.thermal_edge.rising(is_key_down(KeyCode::T)) {
                self.drone.toggle_thermal();
            }

            let now = get_time();
            self.update(&input, get_frame_time(), now);

            renderer.draw_frame(
                &self.camera,
                &self.scene,
                &self.lamps,
                &self.drone,
                &self.hud,
                now,
            );
            next_frame().await;
        }

        set_cursor_grab(false);
        show_mouse(true);
        info!("Exiting DroneWatch.");
        Ok(())
    }

    /// Advance the simulation by one frame. Split from `run` so the whole
    /// pipeline can be driven without a window.
    pub fn update(&mut self, input: &FlightInput, dt: f32, now: f64) {
        self.drone
            .integrate(&mut self.camera, input, dt, &self.obstacles);
        self.drone.update_signal(&mut self.camera, now);
        self.battery.update(now);

        let elapsed = (now - self.start_time).max(0.0) as u64;
        self.hud.update(elapsed, self.battery.percent());
    }
}
