use egui::{Painter, Pos2, Rect, Response, Sense, Ui, Vec2, Widget};

use crate::like::LikeView;

/// Side of the icon square when none is given.
pub const DEFAULT_ICON_SIZE: f32 = 48.0;

/// egui widget for a [`LikeView`].
///
/// Clicking the icon toggles the liked state and bursts particles from the
/// icon's center. Particle origins are kept relative to the icon, so the
/// burst follows the button if the layout moves mid-animation. The burst is advanced with the ui clock and repaints are
/// requested until it lands. The icon itself is drawn by `paint_icon`, which
/// receives the handle for the current state.
///
/// ```no_run
/// # use likeview::{LikeButton, LikeView};
/// # fn show(ui: &mut egui::Ui, view: &mut LikeView<char>) {
/// ui.add(LikeButton::new(view, |painter: &egui::Painter, rect: egui::Rect, glyph: &char| {
///     painter.text(
///         rect.center(),
///         egui::Align2::CENTER_CENTER,
///         glyph,
///         egui::FontId::proportional(rect.height()),
///         egui::Color32::WHITE,
///     );
/// }));
/// # }
/// ```
pub struct LikeButton<'a, I, F> {
    view: &'a mut LikeView<I>,
    paint_icon: F,
    icon_size: Vec2,
}

impl<'a, I, F> LikeButton<'a, I, F>
where
    F: Fn(&Painter, Rect, &I),
{
    pub fn new(view: &'a mut LikeView<I>, paint_icon: F) -> Self {
        Self {
            view,
            paint_icon,
            icon_size: Vec2::splat(DEFAULT_ICON_SIZE),
        }
    }

    pub fn icon_size(mut self, size: impl Into<Vec2>) -> Self {
        self.icon_size = size.into();
        self
    }

    /// How far particles can reach past the icon's center.
    fn burst_reach(&self) -> f32 {
        let config = self.view.engine().config();
        config.target_distance.max as f32 + config.size.max as f32
    }
}

impl<I, F> Widget for LikeButton<'_, I, F>
where
    F: Fn(&Painter, Rect, &I),
{
    fn ui(self, ui: &mut Ui) -> Response {
        let reach = self.burst_reach();
        let Self {
            view,
            paint_icon,
            icon_size,
        } = self;

        let desired = icon_size + Vec2::splat(2.0 * reach);
        let (rect, area) = ui.allocate_exact_size(desired, Sense::hover());
        let icon_rect = Rect::from_center_size(rect.center(), icon_size);
        let mut response = ui.interact(icon_rect, area.id.with("like_icon"), Sense::click());

        if response.clicked() {
            view.on_tap(Pos2::ZERO);
            response.mark_changed();
        }

        if view.is_animating() {
            let now_ms = (ui.input(|i| i.time) * 1000.0) as u64;
            if !view.on_frame(now_ms).completed {
                ui.ctx().request_repaint();
            }
        }
        if view.engine_mut().take_dirty() {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            paint_icon(painter, icon_rect, view.icon());
            let anchor = icon_rect.center().to_vec2();
            for particle in view.engine().render() {
                painter.circle_filled(particle.pos + anchor, particle.size, particle.color);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BurstConfig, LikeIcons, ParticleEngine};
    use egui::epaint::{ClippedShape, Shape};
    use egui::{Context, Event, Modifiers, PointerButton, RawInput};

    fn view() -> LikeView<u8> {
        LikeView::with_engine(
            LikeIcons::new(1, 0),
            ParticleEngine::with_seed(BurstConfig::default(), 17),
        )
    }

    fn input(time: f64, events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::splat(600.0))),
            time: Some(time),
            events,
            ..RawInput::default()
        }
    }

    /// Runs one frame with the button pushed down by `offset`, returning its
    /// response and every shape painted.
    fn show(
        ctx: &Context,
        raw: RawInput,
        offset: f32,
        view: &mut LikeView<u8>,
    ) -> (Response, Vec<ClippedShape>) {
        let mut response = None;
        let output = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(offset);
                response = Some(ui.add(LikeButton::new(view, |_: &Painter, _: Rect, _: &u8| {})));
            });
        });
        (response.unwrap(), output.shapes)
    }

    fn circles(shapes: &[ClippedShape]) -> Vec<(Pos2, f32, u8)> {
        shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Circle(circle) => Some((circle.center, circle.radius, circle.fill.a())),
                _ => None,
            })
            .collect()
    }

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// Clicks the icon at its current place and returns the icon center.
    fn click(ctx: &Context, view: &mut LikeView<u8>) -> (Pos2, Response) {
        let center = show(ctx, input(0.0, vec![]), 0.0, view).0.rect.center();
        show(ctx, input(0.1, vec![Event::PointerMoved(center)]), 0.0, view);
        show(ctx, input(0.2, vec![press(center, true)]), 0.0, view);
        let (response, _) = show(ctx, input(0.25, vec![press(center, false)]), 0.0, view);
        (center, response)
    }

    #[test]
    fn icon_rect_has_requested_size() {
        let ctx = Context::default();
        let mut v = view();
        let (response, shapes) = show(&ctx, input(0.0, vec![]), 0.0, &mut v);
        assert_eq!(response.rect.size(), Vec2::splat(DEFAULT_ICON_SIZE));
        assert!(!v.is_animating());
        assert!(circles(&shapes).is_empty());
    }

    #[test]
    fn reach_of_unvalidated_config_does_not_overflow() {
        let config = BurstConfig {
            target_distance: crate::Span::fixed(u32::MAX),
            size: crate::Span::fixed(u32::MAX),
            ..BurstConfig::default()
        };
        let mut v = LikeView::new(LikeIcons::new(1, 0), config);
        let reach = LikeButton::new(&mut v, |_: &Painter, _: Rect, _: &u8| {}).burst_reach();
        assert!(reach.is_finite() && reach > 8.0e9);
    }

    #[test]
    fn click_toggles_and_starts_burst() {
        let ctx = Context::default();
        let mut v = view();
        let (_, response) = click(&ctx, &mut v);

        assert!(response.clicked());
        assert!(response.changed());
        assert!(v.is_liked());
        assert!(v.is_animating());
        assert!(v.engine().particles().iter().all(|p| p.origin == Pos2::ZERO));

        // the ui clock drives the burst to completion
        let (_, shapes) = show(&ctx, input(1.0, vec![]), 0.0, &mut v);
        assert!(!v.is_animating());
        assert!(circles(&shapes).is_empty());
    }

    #[test]
    fn paints_one_circle_per_live_particle() {
        let ctx = Context::default();
        let mut v = view();
        let (center, _) = click(&ctx, &mut v);

        // 150ms into the burst
        let (_, shapes) = show(&ctx, input(0.4, vec![]), 0.0, &mut v);
        let painted = circles(&shapes);
        let particles = v.engine().particles();
        assert!(!particles.is_empty());
        assert_eq!(painted.len(), particles.len());
        for ((pos, radius, alpha), p) in painted.iter().zip(particles) {
            assert_eq!(*pos, center + p.position().to_vec2());
            assert_eq!(*radius, p.size);
            assert_eq!(*alpha, p.alpha);
            assert!(*alpha > 0);
        }
    }

    #[test]
    fn burst_follows_icon_when_layout_moves() {
        let ctx = Context::default();
        let mut v = view();
        let (center, _) = click(&ctx, &mut v);

        let shift = Vec2::new(0.0, 50.0);
        let (response, shapes) = show(&ctx, input(0.3, vec![]), shift.y, &mut v);
        let moved = response.rect.center();
        assert!((moved - (center + shift)).length() < 1e-3);

        let painted = circles(&shapes);
        assert_eq!(painted.len(), v.engine().particles().len());
        for ((pos, _, _), p) in painted.iter().zip(v.engine().particles()) {
            assert_eq!(*pos, moved + p.position().to_vec2());
        }
    }
}
