use macroquad::input::{KeyCode, MouseButton, is_key_down, is_mouse_button_down};

/// One tick of movement input, decoupled from the window layer so the flight
/// code can be driven directly in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub ghost: bool,
}

impl FlightInput {
    // Snapshot the keys and buttons that drive flight this frame.
    // W/S/A/D translate, Space/LeftShift climb and descend, middle mouse
    // holds ghost mode (collision bypass).
    pub fn poll() -> Self {
        FlightInput {
            forward: is_key_down(KeyCode::W),
            back: is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::Space),
            down: is_key_down(KeyCode::LeftShift),
            ghost: is_mouse_button_down(MouseButton::Middle),
        }
    }

    pub fn any_direction(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Press-transition detector. `rising` returns true exactly once per
/// false -> true transition of the sampled signal, however long it stays high.
/// Works for any boolean source, not just keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    was_high: bool,
}

impl EdgeDetector {
    pub fn rising(&mut self, high: bool) -> bool {
        let fired = high && !self.was_high;
        self.was_high = high;
        fired
    }
}
