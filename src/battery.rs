use crate::config::BATTERY_DRAIN_INTERVAL;

/// Battery charge as a percentage. Drops 1% per fixed wall-clock interval,
/// independent of frame rate and of what the drone is doing, and never
/// recovers. The floor is 0.
#[derive(Debug, Clone, Copy)]
pub struct Battery {
    percent: f32,
    last_drain: f64,
}

impl Battery {
    pub fn new(now: f64) -> Self {
        Battery {
            percent: 100.0,
            last_drain: now,
        }
    }

    // Call once per tick with the current app-clock seconds. A stalled clock
    // defers the drop; a long stall still costs only one percent because the
    // interval timer resets to `now`, not to the missed deadline.
    pub fn update(&mut self, now: f64) {
        if now - self.last_drain > BATTERY_DRAIN_INTERVAL {
            let before = self.percent;
            self.percent = (self.percent - 1.0).max(0.0);
            self.last_drain = now;
            crate::debug_battery!("battery at {:.0}%", self.percent);
            if before > 0.0 && self.percent <= 0.0 {
                log::warn!("Battery depleted");
            }
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_starts_full() {
        let battery = Battery::new(0.0);
        assert_approx_eq!(battery.percent(), 100.0);
    }

    #[test]
    fn test_drains_one_percent_per_interval() {
        let mut battery = Battery::new(0.0);
        let step = BATTERY_DRAIN_INTERVAL + 0.01;

        battery.update(step);
        assert_approx_eq!(battery.percent(), 99.0);
        battery.update(2.0 * step);
        assert_approx_eq!(battery.percent(), 98.0);
    }

    #[test]
    fn test_no_drain_within_interval() {
        let mut battery = Battery::new(0.0);
        let mut t = 0.0;
        while t < BATTERY_DRAIN_INTERVAL {
            battery.update(t);
            t += 0.01;
        }
        assert_approx_eq!(battery.percent(), 100.0);
    }

    #[test]
    fn test_fast_ticking_does_not_drain_faster() {
        let mut battery = Battery::new(0.0);
        let mut t = 0.0;
        // ~100 simulated seconds of 5 ms frames
        while t < 100.0 {
            battery.update(t);
            t += 0.005;
        }
        // 16 full intervals fit in 100 s of reset-to-now cadence
        assert_approx_eq!(battery.percent(), 100.0 - 16.0, 1.0 + 1e-3);
    }

    #[test]
    fn test_long_stall_costs_one_percent() {
        let mut battery = Battery::new(0.0);
        battery.update(50.0 * BATTERY_DRAIN_INTERVAL);
        assert_approx_eq!(battery.percent(), 99.0);
    }

    #[test]
    fn test_clamped_at_zero() {
        let mut battery = Battery::new(0.0);
        let step = BATTERY_DRAIN_INTERVAL + 0.01;
        for n in 1..=150 {
            battery.update(n as f64 * step);
            assert!(battery.percent() >= 0.0);
        }
        assert_approx_eq!(battery.percent(), 0.0);
    }
}
