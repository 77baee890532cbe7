use crate::bounds::Aabb;
use crate::camera::FlightCamera;
use crate::config::{BATTERY_COLOR, LAMP_COLOR, LAMP_INTENSITY, TIMER_COLOR};
use crate::drone::DroneState;
use crate::hud::Hud;
use crate::scene::SceneGeometry;
use macroquad::prelude::*;

const CLEAR_COLOR: Color = Color::new(0.01, 0.01, 0.02, 1.0);
const HUD_LINE_THICKNESS: f32 = 2.0;
const LAMP_RADIUS: f32 = 0.18;
const LIGHTS_OFF_DIM: f32 = 0.35; // Obstacle brightness factor while the lamps are dark
const WARNING_HALF_WIDTH: f32 = 0.35; // Warning backdrop half extents, NDC units
const WARNING_HALF_HEIGHT: f32 = 0.12;

// Conversion helpers
fn color_rgba(c: [f32; 4]) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

fn faded_color(mut color: Color, alpha: f32) -> Color {
    color.a *= alpha;
    color
}

fn brighten_color(color: Color, amount: f32) -> Color {
    Color::new(
        (color.r + amount).min(1.0),
        (color.g + amount).min(1.0),
        (color.b + amount).min(1.0),
        color.a,
    )
}

// False-color ramp for thermal view, keyed on the top face height
fn thermal_color(height: f32) -> Color {
    let t = (height / 7.0).clamp(0.0, 1.0);
    Color::new(0.55 + 0.45 * t, 0.08 + 0.72 * t, 0.05, 1.0)
}

fn ndc_to_screen(p: Vec3, screen_w: f32, screen_h: f32) -> Vec2 {
    vec2((p.x + 1.0) * 0.5 * screen_w, (1.0 - p.y) * 0.5 * screen_h)
}

// Handles rendering the simulation state using macroquad
pub struct Renderer {
    // One fixed color per obstacle group, assigned at startup
    obstacle_palette: Vec<Color>,
}

impl Renderer {
    pub fn new(scene: &SceneGeometry) -> Self {
        let obstacle_palette = (0..scene.obstacles.len())
            .map(|i| {
                let shade = 0.30 + 0.05 * ((i * 3) % 5) as f32;
                Color::new(shade, shade + 0.02, shade + 0.06, 1.0)
            })
            .collect();
        Renderer { obstacle_palette }
    }

    pub fn draw_frame(
        &mut self,
        camera: &FlightCamera,
        scene: &SceneGeometry,
        lamps: &[Vec3],
        drone: &DroneState,
        hud: &Hud,
        now: f64,
    ) {
        clear_background(CLEAR_COLOR);

        // --- 3D pass ---
        set_camera(&camera.camera3d());

        let dim = if drone.lights_on { 1.0 } else { LIGHTS_OFF_DIM };
        for (i, group) in scene.obstacles.iter().enumerate() {
            let aabb = match Aabb::from_vertices(&group.vertices) {
                Some(aabb) => aabb,
                None => continue,
            };
            let center = aabb.center();
            let size = aabb.size();

            let body = if drone.thermal_on {
                thermal_color(aabb.max.y)
            } else {
                let base = self
                    .obstacle_palette
                    .get(i)
                    .copied()
                    .unwrap_or(Color::new(0.35, 0.37, 0.41, 1.0));
                Color::new(base.r * dim, base.g * dim, base.b * dim, 1.0)
            };
            draw_cube(center, size, None, body);
            draw_cube_wires(center, size, brighten_color(body, 0.12));
        }

        let lamp_color = if drone.lights_on {
            Color::new(LAMP_COLOR[0], LAMP_COLOR[1], LAMP_COLOR[2], 1.0)
        } else {
            Color::new(0.14, 0.14, 0.17, 1.0)
        };
        for lamp in lamps {
            draw_sphere(*lamp, LAMP_RADIUS, None, lamp_color);
            if drone.lights_on {
                // Halo sphere stands in for the point light falloff
                let halo = faded_color(lamp_color, (LAMP_INTENSITY * 0.004).min(0.2));
                draw_sphere(*lamp, LAMP_RADIUS * 2.2, None, halo);
            }
        }

        // --- HUD pass ---
        set_default_camera();
        Self::draw_hud_lines(hud.timer_lines(), color_rgba(TIMER_COLOR));
        Self::draw_hud_lines(hud.battery_lines(), color_rgba(BATTERY_COLOR));

        if drone.is_signal_lost() {
            Self::draw_signal_warning(hud.banner_lines(), now);
        }
    }

    // Draws an endpoint-pair buffer as 2D lines, mapping NDC to pixels
    fn draw_hud_lines(lines: &[Vec3], color: Color) {
        let screen_w = screen_width();
        let screen_h = screen_height();
        for pair in lines.chunks_exact(2) {
            let a = ndc_to_screen(pair[0], screen_w, screen_h);
            let b = ndc_to_screen(pair[1], screen_w, screen_h);
            draw_line(a.x, a.y, b.x, b.y, HUD_LINE_THICKNESS, color);
        }
    }

    fn draw_signal_warning(banner: &[Vec3], now: f64) {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let top_left = ndc_to_screen(
            vec3(-WARNING_HALF_WIDTH, WARNING_HALF_HEIGHT, 0.0),
            screen_w,
            screen_h,
        );
        let bottom_right = ndc_to_screen(
            vec3(WARNING_HALF_WIDTH, -WARNING_HALF_HEIGHT, 0.0),
            screen_w,
            screen_h,
        );

        let pulse = ((now * 8.0).sin() as f32) * 0.25 + 0.55;
        draw_rectangle(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
            faded_color(Color::new(0.35, 0.02, 0.02, 1.0), pulse),
        );
        let banner_color = faded_color(Color::new(1.0, 0.85, 0.85, 1.0), (pulse + 0.3).min(1.0));
        Self::draw_hud_lines(banner, banner_color);
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}
