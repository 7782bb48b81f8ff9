//! Tick clock for the render/animation loop
//!
//! Tracks total elapsed seconds and a clamped per-frame delta. The camera
//! transition engine samples against `now()`; the orbit damping uses
//! `delta()`.

/// Configuration for the tick clock
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Maximum delta time to prevent animation jumps after a stall
    pub max_delta_time: f32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            max_delta_time: 0.25,
        }
    }
}

/// Frame time tracking for the continuous render/animation domain
#[derive(Debug, Clone)]
pub struct TickClock {
    /// Configuration
    pub config: TickConfig,
    /// Time since app start in seconds
    total_time: f64,
    /// Delta time for this frame (clamped)
    delta_time: f32,
    /// Frame counter
    frame_count: u64,
}

impl Default for TickClock {
    fn default() -> Self {
        Self {
            config: TickConfig::default(),
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
        }
    }
}

impl TickClock {
    /// Create a new clock with custom config
    pub fn new(config: TickConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.delta_time = raw_delta.min(self.config.max_delta_time);
        self.total_time += self.delta_time as f64;
        self.frame_count += 1;
    }

    /// Seconds since app start, as sampled by the transition engine
    pub fn now(&self) -> f32 {
        self.total_time as f32
    }

    /// Clamped delta time for this frame
    pub fn delta(&self) -> f32 {
        self.delta_time
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
