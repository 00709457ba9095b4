//! Reference renderer for a [`Router`].
//!
//! [`RouterView`] draws the whole two-dimensional stack:
//!
//! - every vertical level shows its topmost route (the last pushed one, or
//!   the root), with the screen's navigation bar above its content and the
//!   screen's overlay over both,
//! - presented levels are layered over the level below: full-screen levels
//!   cover everything, sheets are anchored at the bottom over a dimmed
//!   backdrop,
//! - clicking a sheet's backdrop dismisses it the way a platform gesture
//!   would: through the level's [`PresentationInfo`], so the router state is
//!   reconciled without a transition.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ level 0 (root)           │
//! │ ┌──────────────────────┐ │  ← backdrop (click = dismiss)
//! │ │ level 1 (sheet)      │ │
//! └─┴──────────────────────┴─┘
//! ```
//!
//! The view re-renders whenever the router notifies.

use crate::binding::{PresentationInfo, VerticalBinding};
use crate::router::Router;
use crate::state::{HorizontalPath, PresentationType, SheetDetent};
use crate::trace_log;
use gpui::*;
use std::collections::BTreeSet;

/// Share of the available height a [`SheetDetent::Medium`] sheet takes.
const MEDIUM_DETENT_FRACTION: f32 = 0.5;
/// Share of the available height a [`SheetDetent::Large`] sheet takes.
const LARGE_DETENT_FRACTION: f32 = 0.92;

/// Renders all levels of a router.
pub struct RouterView {
    router: Entity<Router>,
    _observation: Subscription,
}

impl RouterView {
    /// Create a view for `router`.
    pub fn new(router: Entity<Router>, cx: &mut Context<'_, Self>) -> Self {
        let observation = cx.observe(&router, |_, _, cx| cx.notify());
        Self {
            router,
            _observation: observation,
        }
    }

    /// The rendered router.
    pub fn router(&self) -> &Entity<Router> {
        &self.router
    }
}

impl Render for RouterView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        // Clone the paths so no router borrow is held while screens render.
        let paths: Vec<HorizontalPath> = self.router.read(cx).paths().to_vec();
        trace_log!("RouterView: rendering {} level(s)", paths.len());

        let mut stack = div().relative().size_full().overflow_hidden();
        for (index, path) in paths.iter().enumerate() {
            let level = render_level(path, window, cx);
            if index == 0 {
                stack = stack.child(level);
                continue;
            }
            let Some(info) = VerticalBinding::new(&self.router, index).get(cx) else {
                continue;
            };
            stack = stack.child(render_presented(&info, level, window));
        }
        stack
    }
}

/// Render the topmost route of one vertical level.
fn render_level(path: &HorizontalPath, window: &mut Window, cx: &mut App) -> AnyElement {
    let screen = path.top().screen();
    let navigation_bar = screen.navigation_bar(window, cx);
    let content = screen.content(window, cx);
    let overlay = screen.overlay(window, cx).map(|overlay| {
        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .child(overlay)
    });

    div()
        .id(ElementId::Name(path.top().id().clone()))
        .relative()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(0xff_ff_ff))
        .children(navigation_bar)
        .child(div().flex_1().overflow_hidden().child(content))
        .children(overlay)
        .into_any_element()
}

/// Layer a presented level over the ones below it.
fn render_presented(info: &PresentationInfo, level: AnyElement, window: &Window) -> AnyElement {
    let layer = div().absolute().top_0().left_0().size_full();
    match info.presentation_type() {
        PresentationType::FullScreen => layer.child(level).into_any_element(),
        PresentationType::Sheet { detents } => {
            let on_dismiss = info.on_dismiss();
            let height = sheet_height(detents, window.viewport_size().height);
            layer
                .flex()
                .flex_col()
                .justify_end()
                .child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .size_full()
                        .bg(hsla(0., 0., 0., 0.4))
                        .on_mouse_down(MouseButton::Left, move |_, _, cx| on_dismiss(cx)),
                )
                .child(
                    div()
                        .relative()
                        .w_full()
                        .h(height)
                        .rounded_lg()
                        .overflow_hidden()
                        .child(level),
                )
                .into_any_element()
        }
    }
}

/// Height of a sheet resting at its largest detent within `available`.
///
/// An empty detent set rests at [`SheetDetent::Large`].
fn sheet_height(detents: &BTreeSet<SheetDetent>, available: Pixels) -> Pixels {
    let resolve = |detent: &SheetDetent| match detent {
        SheetDetent::Medium => available * MEDIUM_DETENT_FRACTION,
        SheetDetent::Large => available * LARGE_DETENT_FRACTION,
        SheetDetent::Height(height) => {
            let height = px(*height as f32);
            if height > available { available } else { height }
        }
    };
    detents
        .iter()
        .map(resolve)
        .reduce(|a, b| if b > a { b } else { a })
        .unwrap_or_else(|| resolve(&SheetDetent::Large))
}
