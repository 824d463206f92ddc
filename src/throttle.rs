//! Call-count frame decimator.
//!
//! Keeps one frame out of every `round(source_fps / target_fps)` calls. It has
//! no notion of elapsed time; it assumes the caller offers frames at the
//! source rate.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ThrottleOptions {
    /// Assumed upstream call rate.
    pub source_fps: f32,
    /// Desired processing rate.
    pub target_fps: f32,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            source_fps: 60.0,
            target_fps: 15.0,
        }
    }
}

impl ThrottleOptions {
    /// Decimation ratio, never below 1.
    pub fn ratio(&self) -> u64 {
        if self.target_fps.is_nan() || self.target_fps <= 0.0 || !self.source_fps.is_finite() {
            return 1;
        }
        (self.source_fps / self.target_fps).round().max(1.0) as u64
    }
}

#[derive(Clone, Debug)]
pub struct FrameThrottle {
    ratio: u64,
    counter: u64,
}

impl FrameThrottle {
    pub fn new(opts: &ThrottleOptions) -> Self {
        Self::with_ratio(opts.ratio())
    }

    pub fn with_ratio(ratio: u64) -> Self {
        Self {
            ratio: ratio.max(1),
            counter: 0,
        }
    }

    /// Resume from a known call count.
    pub fn with_counter(mut self, counter: u64) -> Self {
        self.counter = counter;
        self
    }

    /// Count one offered frame; `true` when it should be processed.
    pub fn should_process(&mut self) -> bool {
        self.counter = self.counter.wrapping_add(1);
        self.counter % self.ratio == 0
    }

    pub fn ratio(&self) -> u64 {
        self.ratio
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(&ThrottleOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_every_fourth_call() {
        let mut throttle = FrameThrottle::default();
        assert_eq!(throttle.ratio(), 4);
        let accepted: Vec<u64> = (1..=16).filter(|_| throttle.should_process()).collect();
        assert_eq!(accepted, vec![4, 8, 12, 16]);
    }

    #[test]
    fn acceptance_depends_only_on_the_counter() {
        for start in [0u64, 1, 2, 3, 97, 1_000_003] {
            let mut throttle = FrameThrottle::with_ratio(4).with_counter(start);
            for _ in 0..12 {
                let accepted = throttle.should_process();
                assert_eq!(accepted, throttle.counter() % 4 == 0);
            }
        }
    }

    #[test]
    fn ratio_rounds_and_never_drops_to_zero() {
        let opts = |source_fps, target_fps| ThrottleOptions {
            source_fps,
            target_fps,
        };
        assert_eq!(opts(30.0, 15.0).ratio(), 2);
        assert_eq!(opts(60.0, 25.0).ratio(), 2);
        assert_eq!(opts(60.0, 24.0).ratio(), 3);
        assert_eq!(opts(10.0, 30.0).ratio(), 1);
        assert_eq!(opts(60.0, 0.0).ratio(), 1);
        let mut every = FrameThrottle::with_ratio(0);
        assert!((0..5).all(|_| every.should_process()));
    }
}
