//! Host event hooks: the pulsing tick and click handling.
//!
//! Neither hook touches global state. The tick counter lives in an
//! `AnimationState` the host owns and passes in; the host also decides how
//! often to tick.

use crate::geometry::Point;
use crate::render::Rose;

/// Phase advance per tick, in radians.
pub const PULSE_STEP: f64 = 0.1;

/// Opacity swings this far either side of `PULSE_CENTER`.
pub const PULSE_DEPTH: f64 = 0.4;
pub const PULSE_CENTER: f64 = 0.6;

/// Counter driving the pulse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationState {
    pub count: u64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Group opacity at a given tick count: cos(0.1 n) * 0.4 + 0.6.
///
/// Always within [0.2, 1.0].
#[inline]
pub fn pulse_alpha(count: u64) -> f64 {
    (count as f64 * PULSE_STEP).cos() * PULSE_DEPTH + PULSE_CENTER
}

/// Advance one tick and return the new group opacity.
///
/// The opacity uses the count before the increment, so the first tick
/// yields 1.0.
pub fn on_tick(state: &mut AnimationState) -> f64 {
    let alpha = pulse_alpha(state.count);
    state.count += 1;
    tracing::trace!(count = state.count, alpha, "tick");
    alpha
}

/// A pointer press in rose coordinates (origin at the center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub x: f64,
    pub y: f64,
}

/// Handle a click on the rose.
///
/// The rose keeps `mouse_children` off, so the event target is always the
/// rose itself. All this does is report the petal under the pointer.
pub fn on_click(rose: &Rose, event: &ClickEvent) -> Option<usize> {
    let hit = rose.petal_at(Point::new(event.x, event.y));
    tracing::debug!(x = event.x, y = event.y, petal = ?hit, "click");
    hit
}

/// Apply a tick directly to a rose's group opacity.
pub fn tick_rose(rose: &mut Rose, state: &mut AnimationState) {
    rose.alpha = on_tick(state);
}
