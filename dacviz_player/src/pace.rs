// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speed slider to per-step delay.

use std::time::Duration;

const FULL_DELAY_MS: f64 = 1000.0;
const MIN_POINT_DELAY_MS: f64 = 10.0;

/// Replay speed as a slider position in `0.0..=1.0` (0 is slowest).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pace {
    slider: f64,
}

impl Default for Pace {
    fn default() -> Self {
        Self { slider: 0.5 }
    }
}

impl Pace {
    /// Pace for a slider position; out-of-range and NaN positions are clamped.
    pub fn from_slider(slider: f64) -> Self {
        let slider = if slider.is_nan() { 0.5 } else { slider.clamp(0.0, 1.0) };
        Self { slider }
    }

    /// Slider position.
    pub fn slider(&self) -> f64 {
        self.slider
    }

    /// Delay between closest-pair steps: never below 10 ms so every frame
    /// stays visible.
    pub fn closest_pair_delay(&self) -> Duration {
        millis(((1.0 - self.slider) * FULL_DELAY_MS).max(MIN_POINT_DELAY_MS))
    }

    /// Delay between Karatsuba steps; zero at full speed.
    pub fn karatsuba_delay(&self) -> Duration {
        millis((1.0 - self.slider) * FULL_DELAY_MS)
    }
}

fn millis(ms: f64) -> Duration {
    Duration::from_secs_f64(ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_half_speed() {
        let p = Pace::default();
        assert_eq!(p.closest_pair_delay(), Duration::from_millis(500));
        assert_eq!(p.karatsuba_delay(), Duration::from_millis(500));
    }

    #[test]
    fn full_speed_keeps_a_floor_for_points() {
        let p = Pace::from_slider(1.0);
        assert_eq!(p.closest_pair_delay(), Duration::from_millis(10));
        assert_eq!(p.karatsuba_delay(), Duration::ZERO);
    }

    #[test]
    fn slider_is_clamped() {
        assert_eq!(Pace::from_slider(-3.0).slider(), 0.0);
        assert_eq!(Pace::from_slider(7.0).slider(), 1.0);
        assert_eq!(Pace::from_slider(f64::NAN), Pace::default());
        assert_eq!(Pace::from_slider(0.0).karatsuba_delay(), Duration::from_secs(1));
    }
}
