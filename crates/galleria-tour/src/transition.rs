//! Camera transition engine
//!
//! Four parameter groups (position, orientation, look-at, zoom) tween
//! independently from their current live values toward a target pose over a
//! shared duration, each through the ease-in-ease-out curve. A new request
//! supersedes the in-flight one: every group re-anchors at whatever its
//! live sampled value is at that instant, never at the old target, so rapid
//! re-selection composes without visible jumps. Nothing mutates camera
//! state asynchronously; the render tick calls `sample`/`update` each
//! frame.

use galleria_core::{ease_in_out, Lerp, Pose};
use glam::Vec3;

/// One in-flight interpolation for a single parameter group.
#[derive(Debug, Clone, Copy)]
struct Tween<T: Lerp> {
    from: T,
    to: T,
    start: f32,
    duration: f32,
}

impl<T: Lerp> Tween<T> {
    /// A tween that is already at its target.
    fn pinned(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    fn sample(&self, now: f32) -> T {
        if self.is_complete(now) {
            // Pin exactly to the target past the end, avoiding residual
            // drift from curve evaluation.
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = (now - self.start) / self.duration;
        T::lerp(self.from, self.to, ease_in_out(t))
    }

    fn is_complete(&self, now: f32) -> bool {
        now - self.start >= self.duration
    }
}

/// Interpolates the live camera pose toward requested targets. Tracks at
/// most one in-flight transition per parameter group; requests supersede,
/// they never queue.
pub struct TransitionEngine {
    position: Tween<Vec3>,
    orientation: Tween<Vec3>,
    look_at: Tween<Vec3>,
    zoom: Tween<f32>,
    completion_reported: bool,
}

impl TransitionEngine {
    /// Create an engine resting at the given pose.
    pub fn new(initial: Pose) -> Self {
        Self {
            position: Tween::pinned(initial.position),
            orientation: Tween::pinned(initial.orientation),
            look_at: Tween::pinned(initial.look_at),
            zoom: Tween::pinned(initial.zoom),
            completion_reported: true,
        }
    }

    /// Place the camera instantaneously, with no animation. Used for the
    /// opening establishing shot.
    pub fn place(&mut self, pose: Pose) {
        self.position = Tween::pinned(pose.position);
        self.orientation = Tween::pinned(pose.orientation);
        self.look_at = Tween::pinned(pose.look_at);
        self.zoom = Tween::pinned(pose.zoom);
        self.completion_reported = true;
    }

    /// Start interpolating every parameter group from its current live
    /// value toward `target` over `duration` seconds, superseding any
    /// in-flight transition.
    pub fn request_transition(&mut self, target: Pose, duration: f32, now: f32) {
        let live = self.sample(now);
        let duration = duration.max(0.0);
        self.position = Tween {
            from: live.position,
            to: target.position,
            start: now,
            duration,
        };
        self.orientation = Tween {
            from: live.orientation,
            to: target.orientation,
            start: now,
            duration,
        };
        self.look_at = Tween {
            from: live.look_at,
            to: target.look_at,
            start: now,
            duration,
        };
        self.zoom = Tween {
            from: live.zoom,
            to: target.zoom,
            start: now,
            duration,
        };
        self.completion_reported = false;
    }

    /// The interpolated pose at time `now`. Pure read.
    pub fn sample(&self, now: f32) -> Pose {
        Pose {
            position: self.position.sample(now),
            orientation: self.orientation.sample(now),
            look_at: self.look_at.sample(now),
            zoom: self.zoom.sample(now),
        }
    }

    /// The pose the engine is currently converging toward.
    pub fn target(&self) -> Pose {
        Pose {
            position: self.position.to,
            orientation: self.orientation.to,
            look_at: self.look_at.to,
            zoom: self.zoom.to,
        }
    }

    /// Whether any parameter group is still interpolating at `now`.
    pub fn is_animating(&self, now: f32) -> bool {
        !(self.position.is_complete(now)
            && self.orientation.is_complete(now)
            && self.look_at.is_complete(now)
            && self.zoom.is_complete(now))
    }

    /// Advance to `now`. Returns true exactly once when the in-flight
    /// transition completes, so the caller can recompute
    /// projection-dependent state a single time.
    pub fn update(&mut self, now: f32) -> bool {
        if !self.completion_reported && !self.is_animating(now) {
            self.completion_reported = true;
            return true;
        }
        false
    }
}
