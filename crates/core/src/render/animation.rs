//! Keyframe animations for quads, and a simple clock-driven [Animator] that
//! can sample them.
//!
//! An [Animation] is a starting set of coordinates plus a chain of
//! [Segment]s. Each segment tweens from wherever the previous one ended to its
//! own target coordinates. Chaining is done with `+`, just like appending
//! segments one after another.

use crate::{
    render::{Animator, Canvas, QuadCoords, QuadHandle},
    util::{lerp, range::NumRange},
};
use fnv::FnvBuildHasher;
use log::trace;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, ops};
use strum::{Display, EnumString};

/// Timing curves for a segment. Every curve maps `0 -> 0` and `1 -> 1`. The
/// `Back` curves overshoot past their target (or undershoot their start)
/// before settling.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Easing {
    Linear,
    InQuad,
    OutQuad,
    InBack,
    OutBack,
}

impl Easing {
    /// How far the back curves overshoot. This is the conventional constant,
    /// which gives a ~10% overshoot.
    const BACK_OVERSHOOT: f64 = 1.70158;

    /// Map a linear progress value in `[0, 1]` onto this curve. Both ends map
    /// exactly onto `0` and `1`, so a segment starts and finishes on its
    /// keyframes with no rounding drift.
    pub fn apply(self, t: f64) -> f64 {
        let s = Self::BACK_OVERSHOOT;
        match self {
            _ if t <= 0.0 => 0.0,
            _ if t >= 1.0 => 1.0,
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => -t * (t - 2.0),
            Self::InBack => t * t * ((s + 1.0) * t - s),
            Self::OutBack => {
                let p = t - 1.0;
                p * p * ((s + 1.0) * p + s) + 1.0
            }
        }
    }
}

/// One leg of an animation
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    /// Coordinates at the end of this segment
    pub to: QuadCoords,
    /// Length of this segment, in seconds
    pub duration: f64,
    pub easing: Easing,
}

/// A chain of segments that moves a quad's coordinates over time
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Animation {
    start: QuadCoords,
    segments: Vec<Segment>,
}

impl Animation {
    /// Start a new (empty) animation from the given coordinates
    pub fn new(start: QuadCoords) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Append a segment that tweens to `to`
    #[must_use]
    pub fn then(mut self, to: QuadCoords, duration: f64, easing: Easing) -> Self {
        self.segments.push(Segment {
            to,
            duration,
            easing,
        });
        self
    }

    pub fn start(&self) -> &QuadCoords {
        &self.start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total length of all segments, in seconds
    pub fn duration(&self) -> f64 {
        self.segments.iter().map(|segment| segment.duration).sum()
    }

    /// The coordinates this animation finishes on
    pub fn end(&self) -> QuadCoords {
        self.segments
            .last()
            .map(|segment| segment.to)
            .unwrap_or(self.start)
    }

    /// Get the coordinates at some point in the animation. Anything at or
    /// past the end gives exactly the final keyframe, and anything before the
    /// start gives exactly the starting coordinates.
    pub fn sample(&self, elapsed: f64) -> QuadCoords {
        let mut from = self.start;
        let mut remaining = elapsed.max(0.0);
        for segment in &self.segments {
            if remaining < segment.duration {
                let t = segment.easing.apply(
                    NumRange::new(0.0, segment.duration).normalize(remaining),
                );
                let mut coords = from;
                for (coord, to) in coords.iter_mut().zip(segment.to.iter()) {
                    *coord = lerp(*coord, *to, t);
                }
                return coords;
            }
            remaining -= segment.duration;
            from = segment.to;
        }
        from
    }
}

// Chaining two animations. The second animation's start coordinates are
// dropped, since it now starts wherever the first one ends.
impl ops::Add for Animation {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.segments.extend(rhs.segments);
        self
    }
}

impl ops::AddAssign for Animation {
    fn add_assign(&mut self, rhs: Self) {
        self.segments.extend(rhs.segments);
    }
}

/// An animation that has been handed to a [Timeline], along with the time it
/// started at
#[derive(Clone, Debug)]
struct Track {
    started_at: f64,
    animation: Animation,
}

impl Track {
    fn ends_at(&self) -> f64 {
        self.started_at + self.animation.duration()
    }
}

/// An [Animator] that runs every animation against a single manually-advanced
/// clock. Each quad gets at most one track. Animating a quad that is still
/// mid-animation queues the new segments onto the end of the running ones,
/// rather than cancelling anything.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    /// Current time, in seconds since the timeline was created
    clock: f64,
    tracks: HashMap<QuadHandle, Track, FnvBuildHasher>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time, in seconds
    pub fn now(&self) -> f64 {
        self.clock
    }

    /// Move the clock forward
    pub fn advance(&mut self, seconds: f64) {
        self.clock += seconds.max(0.0);
    }

    /// Jump the clock to a specific time. The clock can be moved backwards
    /// too, which is handy for rendering the same animation repeatedly.
    pub fn seek(&mut self, time: f64) {
        self.clock = time;
    }

    /// The time at which the last running animation finishes. If nothing has
    /// ever been animated, this is zero.
    pub fn end_time(&self) -> f64 {
        self.tracks.values().map(Track::ends_at).fold(0.0, f64::max)
    }

    /// Is the given quad currently mid-animation?
    pub fn is_animating(&self, handle: QuadHandle) -> bool {
        self.tracks
            .get(&handle)
            .map_or(false, |track| self.is_running(track))
    }

    /// Is every animation finished?
    pub fn is_idle(&self) -> bool {
        !self.tracks.values().any(|track| self.is_running(track))
    }

    /// The full animation currently attached to a quad, if any
    pub fn animation(&self, handle: QuadHandle) -> Option<&Animation> {
        self.tracks.get(&handle).map(|track| &track.animation)
    }

    /// Get the current coordinates for an animated quad. Returns `None` if the
    /// quad has never been animated on this timeline.
    pub fn sample(&self, handle: QuadHandle) -> Option<QuadCoords> {
        self.tracks
            .get(&handle)
            .map(|track| track.animation.sample(self.clock - track.started_at))
    }

    /// Push the current coordinates of every animated quad to a canvas
    pub fn apply(&self, canvas: &mut impl Canvas) {
        for (handle, track) in &self.tracks {
            canvas.update_quad(
                *handle,
                track.animation.sample(self.clock - track.started_at),
            );
        }
    }

    fn is_running(&self, track: &Track) -> bool {
        track.started_at <= self.clock && self.clock < track.ends_at()
    }
}

impl Animator for Timeline {
    fn animate(&mut self, target: QuadHandle, animation: Animation) {
        let clock = self.clock;
        match self.tracks.get_mut(&target) {
            Some(track) if clock < track.ends_at() => {
                trace!(
                    "Queueing {}s animation for quad {} after running one",
                    animation.duration(),
                    target
                );
                track.animation += animation;
            }
            _ => {
                trace!(
                    "Starting {}s animation for quad {} at {}s",
                    animation.duration(),
                    target,
                    clock
                );
                self.tracks.insert(
                    target,
                    Track {
                        started_at: clock,
                        animation,
                    },
                );
            }
        }
    }
}
