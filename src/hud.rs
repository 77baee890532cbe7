//! Procedural HUD geometry: a seven-segment style timer, a battery gauge and
//! the signal-loss banner, all emitted as line-segment endpoint lists in
//! normalized device coordinates. Buffers are rebuilt only when the value
//! they display changes; the renderer just draws whatever is cached here.

use crate::config::{
    BATTERY_ANCHOR, BATTERY_FILL_EPSILON, BATTERY_FILL_INSET, BATTERY_HEIGHT, BATTERY_TIP_WIDTH,
    BATTERY_WIDTH, TIMER_ANCHOR, TIMER_DIGIT_SIZE, TIMER_DIGIT_SPACING,
};
use macroquad::math::{Vec3, vec3};

// Segment endpoints in digit-local units: x in [0, 1], y in [0, 2], both
// scaled by the digit size at placement time.
type Seg = ((f32, f32), (f32, f32));

// Hand-authored seven-segment shapes, one entry per decimal digit
static DIGIT_SEGMENTS: [&[Seg]; 10] = [
    // 0
    &[
        ((0.0, 0.0), (0.0, 2.0)),
        ((0.0, 2.0), (1.0, 2.0)),
        ((1.0, 2.0), (1.0, 0.0)),
        ((1.0, 0.0), (0.0, 0.0)),
    ],
    // 1
    &[((1.0, 2.0), (1.0, 0.0))],
    // 2
    &[
        ((0.0, 2.0), (1.0, 2.0)),
        ((1.0, 2.0), (1.0, 1.0)),
        ((1.0, 1.0), (0.0, 1.0)),
        ((0.0, 1.0), (0.0, 0.0)),
        ((0.0, 0.0), (1.0, 0.0)),
    ],
    // 3
    &[
        ((0.0, 2.0), (1.0, 2.0)),
        ((1.0, 2.0), (1.0, 0.0)),
        ((1.0, 0.0), (0.0, 0.0)),
        ((0.0, 1.0), (1.0, 1.0)),
    ],
    // 4
    &[
        ((0.0, 2.0), (0.0, 1.0)),
        ((0.0, 1.0), (1.0, 1.0)),
        ((1.0, 2.0), (1.0, 0.0)),
    ],
    // 5
    &[
        ((1.0, 2.0), (0.0, 2.0)),
        ((0.0, 2.0), (0.0, 1.0)),
        ((0.0, 1.0), (1.0, 1.0)),
        ((1.0, 1.0), (1.0, 0.0)),
        ((1.0, 0.0), (0.0, 0.0)),
    ],
    // 6
    &[
        ((1.0, 2.0), (0.0, 2.0)),
        ((0.0, 2.0), (0.0, 0.0)),
        ((0.0, 0.0), (1.0, 0.0)),
        ((1.0, 0.0), (1.0, 1.0)),
        ((1.0, 1.0), (0.0, 1.0)),
    ],
    // 7
    &[((0.0, 2.0), (1.0, 2.0)), ((1.0, 2.0), (1.0, 0.0))],
    // 8
    &[
        ((0.0, 0.0), (0.0, 2.0)),
        ((0.0, 2.0), (1.0, 2.0)),
        ((1.0, 2.0), (1.0, 0.0)),
        ((1.0, 0.0), (0.0, 0.0)),
        ((0.0, 1.0), (1.0, 1.0)),
    ],
    // 9
    &[
        ((1.0, 0.0), (1.0, 2.0)),
        ((1.0, 2.0), (0.0, 2.0)),
        ((0.0, 2.0), (0.0, 1.0)),
        ((0.0, 1.0), (1.0, 1.0)),
    ],
];

// Colon between digit groups: two short vertical ticks
static COLON_SEGMENTS: &[Seg] = &[
    ((0.3, 1.35), (0.3, 1.65)),
    ((0.3, 0.35), (0.3, 0.65)),
];

fn push_segments(out: &mut Vec<Vec3>, segments: &[Seg], x: f32, y: f32, size: f32) {
    for &((ax, ay), (bx, by)) in segments {
        out.push(vec3(x + ax * size, y + ay * size, 0.0));
        out.push(vec3(x + bx * size, y + by * size, 0.0));
    }
}

// Appends one decimal digit at (x, y) with the given cell size.
// Digits outside 0-9 are a caller bug; release builds render nothing for them.
pub fn digit_lines(out: &mut Vec<Vec3>, digit: u64, x: f32, y: f32, size: f32) {
    debug_assert!(digit <= 9, "digit out of range: {}", digit);
    match DIGIT_SEGMENTS.get(digit as usize) {
        Some(segments) => push_segments(out, segments, x, y, size),
        None => log::warn!("Skipping out-of-range digit {}", digit),
    }
}

/// Splits elapsed seconds into clock fields: hours, minutes within the hour,
/// seconds within the minute.
pub fn decompose_elapsed(elapsed_seconds: u64) -> (u64, u64, u64) {
    let hours = elapsed_seconds / 3600;
    let minutes = (elapsed_seconds % 3600) / 60;
    let seconds = elapsed_seconds % 60;
    (hours, minutes, seconds)
}

/// Builds the HH:MM:SS readout anchored at the lower-right HUD corner.
pub fn build_timer(elapsed_seconds: u64) -> Vec<Vec3> {
    let (hours, minutes, seconds) = decompose_elapsed(elapsed_seconds);
    // Two digits per field; the display saturates at 99 hours
    let hours = hours.min(99);

    let (start_x, start_y) = TIMER_ANCHOR;
    let size = TIMER_DIGIT_SIZE;
    let spacing = TIMER_DIGIT_SPACING;

    let mut out = Vec::new();
    let mut x = start_x;

    for (index, field) in [hours, minutes, seconds].into_iter().enumerate() {
        digit_lines(&mut out, field / 10, x, start_y, size);
        x += spacing;
        digit_lines(&mut out, field % 10, x, start_y, size);
        x += spacing;

        if index < 2 {
            push_segments(&mut out, COLON_SEGMENTS, x, start_y, size);
            x += spacing * 0.7;
        }
    }
    out
}

/// Builds the battery gauge: outline, terminal nub and a fill bar scaled to
/// the percentage. Fills too narrow to see are omitted entirely.
pub fn build_battery(percent: f32) -> Vec<Vec3> {
    let percent = percent.clamp(0.0, 100.0);
    let (x, y) = BATTERY_ANCHOR;
    let w = BATTERY_WIDTH;
    let h = BATTERY_HEIGHT;

    let mut out = Vec::new();

    // Outline
    push_points(&mut out, &[
        (x, y), (x + w, y),
        (x + w, y), (x + w, y - h),
        (x + w, y - h), (x, y - h),
        (x, y - h), (x, y),
    ]);

    // Terminal nub on the right edge, spanning the middle of the height
    let tip = BATTERY_TIP_WIDTH;
    push_points(&mut out, &[
        (x + w, y - h * 0.3), (x + w + tip, y - h * 0.3),
        (x + w + tip, y - h * 0.3), (x + w + tip, y - h * 0.7),
        (x + w + tip, y - h * 0.7), (x + w, y - h * 0.7),
    ]);

    // Proportional fill, inset from the outline
    let inset = BATTERY_FILL_INSET;
    let fill_w = (w - 2.0 * inset) * (percent / 100.0);
    if fill_w > BATTERY_FILL_EPSILON {
        push_points(&mut out, &[
            (x + inset, y - inset), (x + inset + fill_w, y - inset),
            (x + inset + fill_w, y - inset), (x + inset + fill_w, y - h + inset),
            (x + inset + fill_w, y - h + inset), (x + inset, y - h + inset),
            (x + inset, y - h + inset), (x + inset, y - inset),
        ]);
    }
    out
}

fn push_points(out: &mut Vec<Vec3>, points: &[(f32, f32)]) {
    for &(px, py) in points {
        out.push(vec3(px, py, 0.0));
    }
}

// Letter shapes for the fixed warning banner. This is not a font; only the
// characters of the banner text exist.
fn letter_segments(ch: char) -> Option<&'static [Seg]> {
    match ch {
        'S' => Some(&[
            ((1.0, 2.0), (0.0, 2.0)),
            ((0.0, 2.0), (0.0, 1.0)),
            ((0.0, 1.0), (1.0, 1.0)),
            ((1.0, 1.0), (1.0, 0.0)),
            ((1.0, 0.0), (0.0, 0.0)),
        ]),
        'I' => Some(&[((0.0, 2.0), (0.0, 0.0))]),
        'G' => Some(&[
            ((1.0, 2.0), (0.0, 2.0)),
            ((0.0, 2.0), (0.0, 0.0)),
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (0.5, 1.0)),
        ]),
        'N' => Some(&[
            ((0.0, 0.0), (0.0, 2.0)),
            ((0.0, 2.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 2.0)),
        ]),
        'A' => Some(&[
            ((0.0, 0.0), (0.5, 2.0)),
            ((0.5, 2.0), (1.0, 0.0)),
            ((0.25, 1.0), (0.75, 1.0)),
        ]),
        'L' => Some(&[((0.0, 2.0), (0.0, 0.0)), ((0.0, 0.0), (1.0, 0.0))]),
        'O' => Some(&[
            ((0.0, 0.0), (0.0, 2.0)),
            ((0.0, 2.0), (1.0, 2.0)),
            ((1.0, 2.0), (1.0, 0.0)),
            ((1.0, 0.0), (0.0, 0.0)),
        ]),
        'T' => Some(&[((0.0, 2.0), (1.0, 2.0)), ((0.5, 2.0), (0.5, 0.0))]),
        _ => None,
    }
}

const BANNER_TEXT: &str = "SIGNAL LOST";
const BANNER_LETTER_SIZE: f32 = 0.015;
const BANNER_START_X: f32 = -0.28;
const BANNER_ADVANCE: f32 = 0.05;

/// Builds the warning banner text geometry. Fixed content, built once.
pub fn build_signal_banner() -> Vec<Vec3> {
    let size = BANNER_LETTER_SIZE;
    let mut out = Vec::new();
    let mut x = BANNER_START_X;

    for ch in BANNER_TEXT.chars() {
        if ch == ' ' {
            x += BANNER_ADVANCE * 0.5;
            continue;
        }
        debug_assert!(letter_segments(ch).is_some(), "no shape for {:?}", ch);
        if let Some(segments) = letter_segments(ch) {
            push_segments(&mut out, segments, x, 0.0, size);
        }
        x += BANNER_ADVANCE;
    }
    out
}

/// Owns the HUD buffers and the regenerate-on-change bookkeeping. The timer
/// rebuilds when the whole elapsed second ticks over, the gauge when the
/// battery percentage changes, and the banner never.
#[derive(Debug, Default)]
pub struct Hud {
    timer_lines: Vec<Vec3>,
    battery_lines: Vec<Vec3>,
    banner_lines: Vec<Vec3>,
    last_second: Option<u64>,
    last_percent: Option<f32>,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            banner_lines: build_signal_banner(),
            ..Default::default()
        }
    }

    pub fn update(&mut self, elapsed_seconds: u64, battery_percent: f32) {
        if self.last_second != Some(elapsed_seconds) {
            self.timer_lines = build_timer(elapsed_seconds);
            self.last_second = Some(elapsed_seconds);
            crate::debug_hud!("timer rebuilt at {}s", elapsed_seconds);
        }
        if self.last_percent != Some(battery_percent) {
            self.battery_lines = build_battery(battery_percent);
            self.last_percent = Some(battery_percent);
            crate::debug_hud!("battery gauge rebuilt at {:.0}%", battery_percent);
        }
    }

    pub fn timer_lines(&self) -> &[Vec3] {
        &self.timer_lines
    }

    pub fn battery_lines(&self) -> &[Vec3] {
        &self.battery_lines
    }

    pub fn banner_lines(&self) -> &[Vec3] {
        &self.banner_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn max_x(lines: &[Vec3]) -> f32 {
        lines.iter().map(|p| p.x).fold(f32::MIN, f32::max)
    }

    fn min_x(lines: &[Vec3]) -> f32 {
        lines.iter().map(|p| p.x).fold(f32::MAX, f32::min)
    }

    #[test]
    fn test_decompose_elapsed() {
        assert_eq!(decompose_elapsed(0), (0, 0, 0));
        assert_eq!(decompose_elapsed(3661), (1, 1, 1));
        assert_eq!(decompose_elapsed(59), (0, 0, 59));
        assert_eq!(decompose_elapsed(86399), (23, 59, 59));
    }

    #[test]
    fn test_digit_segment_counts() {
        let expected = [4usize, 1, 5, 4, 3, 5, 5, 2, 5, 4];
        for (digit, want) in expected.iter().enumerate() {
            let mut out = Vec::new();
            digit_lines(&mut out, digit as u64, 0.0, 0.0, 1.0);
            assert_eq!(out.len(), want * 2, "digit {}", digit);
        }
    }

    #[test]
    fn test_digit_cell_extents() {
        let mut out = Vec::new();
        digit_lines(&mut out, 8, 2.0, -1.0, 0.5);
        // Cell is size wide and twice the size tall
        let max_y = out.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let min_y = out.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert_approx_eq!(min_x(&out), 2.0);
        assert_approx_eq!(max_x(&out), 2.5);
        assert_approx_eq!(min_y, -1.0);
        assert_approx_eq!(max_y, 0.0);
    }

    #[test]
    fn test_timer_layout_for_000101() {
        // 00:01:01 -> four zeros (4 segments each), two ones (1 segment each),
        // plus two colons of two ticks each
        let lines = build_timer(61);
        let segments = 4 * 4 + 2 * 1 + 2 * 2;
        assert_eq!(lines.len(), segments * 2);

        // First endpoint sits exactly on the anchor (digit 0 starts at its corner)
        assert_approx_eq!(lines[0].x, TIMER_ANCHOR.0);
        assert_approx_eq!(lines[0].y, TIMER_ANCHOR.1);
        assert_approx_eq!(lines[0].z, 0.0);

        // Last digit's right edge: 5 digit advances, 2 colon advances, 1 cell
        let expect_max = TIMER_ANCHOR.0
            + TIMER_DIGIT_SPACING * 5.0
            + TIMER_DIGIT_SPACING * 0.7 * 2.0
            + TIMER_DIGIT_SIZE;
        assert_approx_eq!(max_x(&lines), expect_max, 1e-5);
    }

    #[test]
    fn test_timer_saturates_at_99_hours() {
        let a = build_timer(99 * 3600);
        let b = build_timer(250 * 3600);
        assert_eq!(a, b);
    }

    #[test]
    fn test_battery_fill_omitted_when_empty() {
        // Outline (4) plus nub (3) only
        assert_eq!(build_battery(0.0).len(), 7 * 2);
        // 1% computes a fill below the visibility threshold
        assert_eq!(build_battery(1.0).len(), 7 * 2);
    }

    #[test]
    fn test_battery_fill_full_interior_at_100() {
        let lines = build_battery(100.0);
        assert_eq!(lines.len(), (7 + 4) * 2);
        let (x, _) = BATTERY_ANCHOR;
        // Fill reaches the inset right edge, nub sticks out past the body
        let fill_right = x + BATTERY_FILL_INSET + (BATTERY_WIDTH - 2.0 * BATTERY_FILL_INSET);
        let nub_right = x + BATTERY_WIDTH + BATTERY_TIP_WIDTH;
        assert_approx_eq!(max_x(&lines), nub_right, 1e-6);
        assert!(lines.iter().any(|p| (p.x - fill_right).abs() < 1e-6));
    }

    #[test]
    fn test_battery_fill_scales_with_percent() {
        let lines = build_battery(50.0);
        let (x, _) = BATTERY_ANCHOR;
        let fill_right = x + BATTERY_FILL_INSET + (BATTERY_WIDTH - 2.0 * BATTERY_FILL_INSET) * 0.5;
        assert!(lines.iter().any(|p| (p.x - fill_right).abs() < 1e-6));
    }

    #[test]
    fn test_battery_percent_clamped() {
        assert_eq!(build_battery(150.0), build_battery(100.0));
        assert_eq!(build_battery(-20.0), build_battery(0.0));
    }

    #[test]
    fn test_banner_shape() {
        let lines = build_signal_banner();
        // S I G N A L L O S T: 5+1+5+3+3+2+2+4+5+2 segments
        assert_eq!(lines.len(), 32 * 2);
        assert_approx_eq!(min_x(&lines), BANNER_START_X);
        // Last letter T at 9 advances plus the half-advance word gap
        let t_left = BANNER_START_X + BANNER_ADVANCE * 9.5;
        assert_approx_eq!(max_x(&lines), t_left + BANNER_LETTER_SIZE, 1e-5);
    }

    #[test]
    fn test_hud_regenerates_only_on_change() {
        let mut hud = Hud::new();
        hud.update(10, 97.0);
        let timer_ptr = hud.timer_lines().as_ptr();
        let battery_ptr = hud.battery_lines().as_ptr();
        let banner_ptr = hud.banner_lines().as_ptr();

        // Same second, same percent: buffers must be left alone
        hud.update(10, 97.0);
        assert_eq!(hud.timer_lines().as_ptr(), timer_ptr);
        assert_eq!(hud.battery_lines().as_ptr(), battery_ptr);

        // Second ticks over: timer replaced, gauge untouched
        hud.update(11, 97.0);
        assert_ne!(hud.timer_lines().as_ptr(), timer_ptr);
        assert_eq!(hud.battery_lines().as_ptr(), battery_ptr);

        // Percent drops: gauge replaced
        hud.update(11, 96.0);
        assert_ne!(hud.battery_lines().as_ptr(), battery_ptr);

        // Banner is immutable
        assert_eq!(hud.banner_lines().as_ptr(), banner_ptr);
    }

    #[test]
    fn test_hud_has_buffers_after_first_update() {
        let mut hud = Hud::new();
        assert!(hud.timer_lines().is_empty());
        hud.update(0, 100.0);
        assert!(!hud.timer_lines().is_empty());
        assert!(!hud.battery_lines().is_empty());
        assert!(!hud.banner_lines().is_empty());
        assert!(hud.timer_lines().len() % 2 == 0);
        assert!(hud.battery_lines().len() % 2 == 0);
    }
}
