use crate::easing::{self, Easing};
use crate::state::{DrawerViewState, CLOSED_EPSILON};
use crate::width::DrawerWidth;
use crate::DrawerState;
use egui::{Color32, Context, Frame, Id, Order, Pos2, Response, Sense, Ui, Vec2};
use tracing::trace;

const DEFAULT_OVERLAY_OPACITY: f32 = 0.8;
const DEFAULT_DURATION_MS: u32 = 150;
const DEFAULT_CLOSE_VELOCITY_THRESHOLD: f32 = 500.0;
const DEFAULT_CLOSE_DRAG_THRESHOLD: f32 = 0.5;

/// Screen edge the panel is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Flips a horizontal delta so movement toward the anchor edge is
    /// positive regardless of side.
    fn toward_edge(self, delta_x: f32) -> f32 {
        match self {
            Side::Left => -delta_x,
            Side::Right => delta_x,
        }
    }
}

/// What happened to the drawer this frame.
pub struct DrawerResponse<R> {
    /// Current open progress in `[0, 1]`.
    pub progress: f32,
    /// The user asked to close the drawer, either by a commit-to-close
    /// release or by tapping the overlay. The host is expected to flip its
    /// open flag to `false`; the drawer then animates shut through the
    /// normal target-tracking path.
    pub close_requested: bool,
    /// The overlay was tapped this frame.
    pub overlay_pressed: bool,
    /// Set when a driven animation ran to completion this frame. Gesture
    /// snap-backs and superseded animations never report here.
    pub animation_ended: Option<DrawerState>,
    /// Result of the content closure, `None` while the panel is fully closed
    /// and not rendered.
    pub inner: Option<R>,
    /// Response of the panel area, when rendered.
    pub response: Option<Response>,
}

/// A side drawer: sliding panel plus backdrop overlay.
///
/// Built fresh every frame, in the same spirit as [`egui::Window`]. The host
/// keeps the authoritative open flag and reacts to
/// [`DrawerResponse::close_requested`] (or the [`Drawer::on_close`] callback)
/// by clearing it:
///
/// ```no_run
/// # let ctx = egui::Context::default();
/// # let mut drawer_open = true;
/// let response = egui_drawer::Drawer::new(drawer_open)
///     .width(egui_drawer::DrawerWidth::Points(240.0))
///     .show(&ctx, |ui| {
///         ui.label("drawer content");
///     });
/// if response.close_requested {
///     drawer_open = false;
/// }
/// ```
pub struct Drawer<'a> {
    id: Id,
    is_open: bool,
    width: DrawerWidth<'a>,
    frame: Option<Frame>,
    overlay_color: Color32,
    overlay_opacity: f32,
    order: Order,
    side: Side,
    swipe_to_close: bool,
    duration_ms: u32,
    easing: Easing,
    close_velocity_threshold: f32,
    close_drag_threshold: f32,
    on_close: Option<Box<dyn FnMut() + 'a>>,
    on_animation_end: Option<Box<dyn FnMut(DrawerState) + 'a>>,
    on_overlay_press: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> Drawer<'a> {
    pub fn new(is_open: bool) -> Self {
        Self {
            id: Id::new("egui_drawer"),
            is_open,
            width: DrawerWidth::default(),
            frame: None,
            overlay_color: Color32::BLACK,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            order: Order::Foreground,
            side: Side::default(),
            swipe_to_close: true,
            duration_ms: DEFAULT_DURATION_MS,
            easing: easing::ease_out_quad,
            close_velocity_threshold: DEFAULT_CLOSE_VELOCITY_THRESHOLD,
            close_drag_threshold: DEFAULT_CLOSE_DRAG_THRESHOLD,
            on_close: None,
            on_animation_end: None,
            on_overlay_press: None,
        }
    }

    /// Identity of the drawer's progress state. Give every drawer its own id
    /// when showing more than one.
    #[inline]
    pub fn id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn width(mut self, width: impl Into<DrawerWidth<'a>>) -> Self {
        self.width = width.into();
        self
    }

    /// Frame of the panel. Defaults to the style's side panel frame.
    #[inline]
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    #[inline]
    pub fn overlay_color(mut self, color: Color32) -> Self {
        self.overlay_color = color;
        self
    }

    /// Overlay opacity at full open, `0.8` by default.
    #[inline]
    pub fn overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Paint order of overlay and panel, [`Order::Foreground`] by default.
    #[inline]
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Enables dragging the panel toward its edge to close it, on by default.
    #[inline]
    pub fn swipe_to_close(mut self, swipe_to_close: bool) -> Self {
        self.swipe_to_close = swipe_to_close;
        self
    }

    /// Duration of driven open/close animations, 150 ms by default.
    #[inline]
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[inline]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Toward-edge release velocity (points/s) that commits to close,
    /// 500 by default.
    #[inline]
    pub fn close_velocity_threshold(mut self, velocity: f32) -> Self {
        self.close_velocity_threshold = velocity;
        self
    }

    /// Toward-edge release distance that commits to close: a value in
    /// `(0, 1]` is a fraction of the drawer width, larger values are points.
    /// `0.5` by default.
    #[inline]
    pub fn close_drag_threshold(mut self, threshold: f32) -> Self {
        self.close_drag_threshold = threshold;
        self
    }

    /// Called when a gesture or overlay tap asks to close the drawer.
    #[inline]
    pub fn on_close(mut self, on_close: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    /// Called when a driven animation runs to completion. Animations
    /// superseded by a new target do not fire this.
    #[inline]
    pub fn on_animation_end(mut self, on_animation_end: impl FnMut(DrawerState) + 'a) -> Self {
        self.on_animation_end = Some(Box::new(on_animation_end));
        self
    }

    /// Called on overlay tap, before the close request is reported.
    #[inline]
    pub fn on_overlay_press(mut self, on_overlay_press: impl FnMut() + 'a) -> Self {
        self.on_overlay_press = Some(Box::new(on_overlay_press));
        self
    }

    pub fn show<R>(
        mut self,
        ctx: &Context,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> DrawerResponse<R> {
        let mut state = DrawerViewState::load(ctx, self.id, self.is_open);
        let now = ctx.input(|i| i.time);
        let duration = self.duration_ms as f64 / 1000.0;

        state.track_target(self.is_open, duration, self.easing, now);
        let animation_ended = state.tick(now);
        if state.anim.is_some() {
            ctx.request_repaint();
        }

        let screen_rect = ctx.screen_rect();
        let width = self.width.resolve(screen_rect.width());
        let progress = state.progress;

        let mut out = DrawerResponse {
            progress,
            close_requested: false,
            overlay_pressed: false,
            animation_ended,
            inner: None,
            response: None,
        };

        let visible = self.is_open || progress > CLOSED_EPSILON;
        if visible {
            if progress > CLOSED_EPSILON {
                self.show_overlay(ctx, screen_rect, progress, &mut out);
            }

            let offset = (1.0 - progress) * width;
            let panel_pos = match self.side {
                Side::Left => Pos2::new(screen_rect.left() - offset, screen_rect.top()),
                Side::Right => Pos2::new(screen_rect.right() - width + offset, screen_rect.top()),
            };
            let panel_frame = self
                .frame
                .unwrap_or_else(|| Frame::side_top_panel(&ctx.style()));

            let panel = egui::Area::new(self.id.with("panel"))
                .order(self.order)
                .fixed_pos(panel_pos)
                .constrain(false)
                .show(ctx, |ui| {
                    panel_frame
                        .show(ui, |ui| {
                            ui.set_min_size(Vec2::new(width, screen_rect.height()));
                            ui.set_max_width(width);
                            add_contents(ui)
                        })
                        .inner
                });

            if self.swipe_to_close && width > 0.0 {
                let drag = panel.response.interact(Sense::drag());
                if drag.drag_started() {
                    state.begin_drag();
                }
                if drag.dragged() {
                    state.drag_by(self.side.toward_edge(drag.drag_delta().x), width);
                }
                if drag.drag_stopped() {
                    let velocity = self.side.toward_edge(ctx.input(|i| i.pointer.velocity().x));
                    let close = state.release(
                        velocity,
                        width,
                        self.close_velocity_threshold,
                        self.close_drag_threshold,
                        duration,
                        self.easing,
                        now,
                    );
                    trace!("drawer released: velocity={velocity:.0}pt/s, close={close}");
                    out.close_requested |= close;
                }
                if state.dragging() || state.anim.is_some() {
                    ctx.request_repaint();
                }
            }

            out.inner = Some(panel.inner);
            out.response = Some(panel.response);
        }

        if out.overlay_pressed {
            if let Some(on_overlay_press) = &mut self.on_overlay_press {
                on_overlay_press();
            }
            // an overlay tap always asks to close
            out.close_requested = true;
        }

        if let Some(end_state) = out.animation_ended {
            trace!("drawer animation finished: {end_state}");
            if let Some(on_animation_end) = &mut self.on_animation_end {
                on_animation_end(end_state);
            }
        }

        if out.close_requested {
            if let Some(on_close) = &mut self.on_close {
                on_close();
            }
        }

        state.store(ctx, self.id);
        out
    }

    fn show_overlay<R>(
        &self,
        ctx: &Context,
        screen_rect: egui::Rect,
        progress: f32,
        out: &mut DrawerResponse<R>,
    ) {
        // interactive only while the host wants the drawer open
        let interactive = self.is_open;
        egui::Area::new(self.id.with("overlay"))
            .order(self.order)
            .fixed_pos(screen_rect.min)
            .interactable(interactive)
            .show(ctx, |ui| {
                let fill = self
                    .overlay_color
                    .gamma_multiply(progress * self.overlay_opacity);
                ui.painter().rect_filled(screen_rect, 0.0, fill);
                if interactive {
                    let response = ui.allocate_rect(screen_rect, Sense::click());
                    if response.clicked() {
                        out.overlay_pressed = true;
                    }
                } else {
                    ui.allocate_rect(screen_rect, Sense::hover());
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawerWidth;
    use egui::{pos2, vec2, Event, Modifiers, PointerButton, RawInput, Rect};

    fn frame_input(time: f64) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            time: Some(time),
            ..Default::default()
        }
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn show_drawer(ctx: &Context, is_open: bool) -> DrawerResponse<()> {
        Drawer::new(is_open)
            .width(DrawerWidth::Points(300.0))
            .show(ctx, |_ui| {})
    }

    #[test]
    fn fully_closed_drawer_renders_nothing() {
        let ctx = Context::default();
        let mut out = None;
        let _ = ctx.run(frame_input(0.0), |ctx| {
            out = Some(show_drawer(ctx, false));
        });
        let out = out.unwrap();
        assert_eq!(out.progress, 0.0);
        assert!(out.response.is_none());
        assert!(out.inner.is_none());
    }

    #[test]
    fn overlay_tap_requests_close_while_open() {
        let ctx = Context::default();
        // right of the 300pt panel, over the backdrop only
        let backdrop = pos2(600.0, 300.0);
        let _ = ctx.run(frame_input(0.0), |ctx| {
            show_drawer(ctx, true);
        });
        let mut input = frame_input(0.01);
        input.events = vec![Event::PointerMoved(backdrop), pointer_button(backdrop, true)];
        let _ = ctx.run(input, |ctx| {
            show_drawer(ctx, true);
        });
        let mut input = frame_input(0.02);
        input.events = vec![pointer_button(backdrop, false)];
        let mut out = None;
        let _ = ctx.run(input, |ctx| {
            out = Some(show_drawer(ctx, true));
        });
        let out = out.unwrap();
        assert_eq!(out.progress, 1.0);
        assert!(out.overlay_pressed);
        assert!(out.close_requested);
    }

    #[test]
    fn closing_overlay_ignores_taps() {
        let ctx = Context::default();
        let backdrop = pos2(600.0, 300.0);
        let _ = ctx.run(frame_input(0.0), |ctx| {
            show_drawer(ctx, true);
        });
        // the host dropped its open flag; the shut animation is in flight
        let _ = ctx.run(frame_input(0.01), |ctx| {
            show_drawer(ctx, false);
        });
        let mut input = frame_input(0.02);
        input.events = vec![Event::PointerMoved(backdrop), pointer_button(backdrop, true)];
        let _ = ctx.run(input, |ctx| {
            show_drawer(ctx, false);
        });
        let mut input = frame_input(0.03);
        input.events = vec![pointer_button(backdrop, false)];
        let mut out = None;
        let _ = ctx.run(input, |ctx| {
            out = Some(show_drawer(ctx, false));
        });
        let out = out.unwrap();
        assert!(out.progress > CLOSED_EPSILON, "still animating shut");
        assert!(out.response.is_some(), "overlay and panel still painted");
        assert!(!out.overlay_pressed);
        assert!(!out.close_requested);
    }

    #[test]
    fn toward_edge_sign_follows_the_anchor_side() {
        assert_eq!(Side::Left.toward_edge(-30.0), 30.0);
        assert_eq!(Side::Right.toward_edge(-30.0), -30.0);
        assert_eq!(Side::Left.toward_edge(30.0), -30.0);
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let drawer = Drawer::new(false);
        assert_eq!(drawer.overlay_opacity, DEFAULT_OVERLAY_OPACITY);
        assert_eq!(drawer.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(drawer.side, Side::Left);
        assert!(drawer.swipe_to_close);
        assert_eq!(
            drawer.close_velocity_threshold,
            DEFAULT_CLOSE_VELOCITY_THRESHOLD
        );
        assert_eq!(drawer.close_drag_threshold, DEFAULT_CLOSE_DRAG_THRESHOLD);
        assert_eq!(drawer.order, Order::Foreground);
    }
}
