use crate::easing::Easing;
use egui::{Context, Id};

/// Progress at or below which the overlay is dropped from painting and
/// hit-testing.
pub(crate) const CLOSED_EPSILON: f32 = 0.001;

/// Progress within this distance of the target does not (re)start an
/// animation.
const TARGET_EPSILON: f32 = 0.01;

/// Terminal state reported when a driven animation runs to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    Closed,
}

impl std::fmt::Display for DrawerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerState::Open => f.write_str("open"),
            DrawerState::Closed => f.write_str("closed"),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct ProgressAnimation {
    from: f32,
    target: f32,
    start_time: f64,
    duration: f64,
    easing: Easing,
    // snap-back animations complete silently
    notify: bool,
}

impl ProgressAnimation {
    fn value_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.target;
        }
        let t = ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32;
        let eased = (self.easing)(t);
        (self.from + (self.target - self.from) * eased).clamp(0.0, 1.0)
    }

    fn finished_at(&self, now: f64) -> bool {
        now - self.start_time >= self.duration
    }
}

#[derive(Clone, Copy)]
struct DragState {
    // progress when the pan started
    origin: f32,
    // signed toward-edge translation since the pan started
    translation: f32,
}

/// Per-drawer state kept in [`Context`] temp data, keyed by the drawer id.
///
/// `progress` is the only real state: 0 is fully closed (panel off-screen,
/// overlay gone), 1 is fully open. It has exactly one writer at a time, either
/// the timed animation or the active drag.
#[derive(Clone)]
pub(crate) struct DrawerViewState {
    pub progress: f32,
    pub anim: Option<ProgressAnimation>,
    drag: Option<DragState>,
    // last observed open intent, for change detection
    last_is_open: Option<bool>,
}

impl DrawerViewState {
    pub fn load(ctx: &Context, id: Id, is_open: bool) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(id))
            .unwrap_or_else(|| Self::new(is_open))
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    fn new(is_open: bool) -> Self {
        Self {
            progress: if is_open { 1.0 } else { 0.0 },
            anim: None,
            drag: None,
            last_is_open: None,
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts or restarts the driven animation when the open intent changed,
    /// or when duration/easing changed under a running animation. No-op while
    /// a drag owns the progress value, and when progress already sits at the
    /// target.
    pub fn track_target(&mut self, is_open: bool, duration: f64, easing: Easing, now: f64) {
        let changed = self.last_is_open != Some(is_open);
        self.last_is_open = Some(is_open);
        if self.dragging() {
            return;
        }
        let target = if is_open { 1.0 } else { 0.0 };

        let restart = if let Some(anim) = &self.anim {
            anim.target != target
                || anim.duration != duration
                || anim.easing as usize != easing as usize
        } else {
            changed && (self.progress - target).abs() > TARGET_EPSILON
        };
        if restart {
            self.anim = Some(ProgressAnimation {
                from: self.progress,
                target,
                start_time: now,
                duration,
                easing,
                notify: true,
            });
        }
    }

    /// Advances the active animation. Returns the terminal state when a
    /// notifying animation ran to completion this frame; an animation
    /// superseded before completion never reports.
    pub fn tick(&mut self, now: f64) -> Option<DrawerState> {
        let anim = self.anim?;
        self.progress = anim.value_at(now);
        if anim.finished_at(now) {
            self.progress = anim.target;
            self.anim = None;
            if anim.notify {
                return Some(if anim.target >= 1.0 {
                    DrawerState::Open
                } else {
                    DrawerState::Closed
                });
            }
        }
        None
    }

    /// A new pan takes over the progress value; reassignment cancels any
    /// in-flight animation.
    pub fn begin_drag(&mut self) {
        self.anim = None;
        self.drag = Some(DragState {
            origin: self.progress,
            translation: 0.0,
        });
    }

    /// Applies an incremental toward-edge delta: 1:1 finger tracking, no
    /// easing. Progress derives from the pan origin and the accumulated
    /// translation, so clamping at either end does not absorb any of the
    /// travel. A non-positive width disables tracking entirely.
    pub fn drag_by(&mut self, toward_edge: f32, width: f32) {
        if width <= 0.0 {
            return;
        }
        self.anim = None;
        let drag = self.drag.get_or_insert(DragState {
            origin: self.progress,
            translation: 0.0,
        });
        drag.translation += toward_edge;
        self.progress = (drag.origin - drag.translation / width).clamp(0.0, 1.0);
    }

    /// Resolves the release. `true` commits to close: the caller reports the
    /// close request and progress stays where the finger left it. `false`
    /// snaps back open without a completion notification.
    #[allow(clippy::too_many_arguments)]
    pub fn release(
        &mut self,
        velocity_toward_edge: f32,
        width: f32,
        velocity_threshold: f32,
        drag_threshold: f32,
        duration: f64,
        easing: Easing,
        now: f64,
    ) -> bool {
        let translation = self.drag.take().map_or(0.0, |drag| drag.translation);
        if should_close(
            velocity_toward_edge,
            translation,
            width,
            velocity_threshold,
            drag_threshold,
        ) {
            true
        } else {
            self.anim = Some(ProgressAnimation {
                from: self.progress,
                target: 1.0,
                start_time: now,
                duration,
                easing,
                notify: false,
            });
            false
        }
    }
}

/// Release decision: either threshold alone commits to close. A drag
/// threshold in `(0, 1]` is a fraction of the drawer width, larger values are
/// absolute points.
pub(crate) fn should_close(
    velocity: f32,
    translation: f32,
    width: f32,
    velocity_threshold: f32,
    drag_threshold: f32,
) -> bool {
    let threshold = if drag_threshold > 0.0 && drag_threshold <= 1.0 {
        width * drag_threshold
    } else {
        drag_threshold
    };
    velocity > velocity_threshold || translation > threshold
}
