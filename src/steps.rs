//! Multi-step navigation.
//!
//! These helpers chain gated operations and await each one's settle duration
//! before starting the next, so every step is animated on its own instead of
//! collapsing into a single visual change.
//!
//! A sequence stops at the first step that was dropped because the gate was
//! closed. Sequences are not protected against other callers: issuing
//! navigation from elsewhere while a sequence runs can make its steps land on
//! an unexpected state.

use crate::error::{NavigationError, NavigationResult};
use crate::route::Route;
use crate::router::Router;
use crate::state::PresentationType;
use crate::transition::RoutingDirection;
use crate::{debug_log, warn_log};
use gpui::{AsyncApp, Context, Task, WeakEntity};
use std::time::Duration;

/// A single step of [`Router::consecutive_steps`].
#[derive(Debug, Clone)]
pub enum NavigationStep {
    Push(Route),
    Pop,
    PopToRoot,
    PopAfter(usize),
    Set(Vec<Route>),
    Present(Route, PresentationType),
    Dismiss,
    /// Hold the gate for an extra custom duration before the next step.
    Wait(Duration),
}

impl Router {
    /// Run one step through the gated operations.
    pub fn run_step(
        &mut self,
        step: NavigationStep,
        cx: &mut Context<'_, Self>,
    ) -> Task<NavigationResult> {
        match step {
            NavigationStep::Push(route) => self.push(route, cx),
            NavigationStep::Pop => self.pop(cx),
            NavigationStep::PopToRoot => self.pop_to_root(cx),
            NavigationStep::PopAfter(index) => self.pop_after(index, cx),
            NavigationStep::Set(routes) => self.set(routes, cx),
            NavigationStep::Present(route, presentation_type) => {
                self.present(route, presentation_type, cx)
            }
            NavigationStep::Dismiss => self.dismiss(cx),
            NavigationStep::Wait(duration) => self.pause(RoutingDirection::Custom(duration), cx),
        }
    }

    /// Run `steps` back to back, each after the previous one has settled.
    ///
    /// Resolves to [`NavigationResult::Applied`] if any step changed the
    /// state, [`NavigationResult::Dropped`] if a step was dropped (the rest
    /// are skipped), and [`NavigationResult::Ignored`] otherwise.
    pub fn consecutive_steps(
        &mut self,
        steps: Vec<NavigationStep>,
        cx: &mut Context<'_, Self>,
    ) -> Task<NavigationResult> {
        cx.spawn(async move |this, cx| {
            let mut outcome = NavigationResult::Ignored;
            for step in steps {
                let task = match this.update(cx, |router, cx| router.run_step(step, cx)) {
                    Ok(task) => task,
                    Err(_) => return released(),
                };
                match task.await {
                    NavigationResult::Dropped => {
                        debug_log!("Step dropped, abandoning remaining steps");
                        return NavigationResult::Dropped;
                    }
                    NavigationResult::Applied => outcome = NavigationResult::Applied,
                    NavigationResult::Ignored => {}
                    NavigationResult::Error(error) => return NavigationResult::Error(error),
                }
            }
            outcome
        })
    }

    /// Pop the topmost level's routes one at a time until only its root is left.
    pub fn multi_pop_to_root(&mut self, cx: &mut Context<'_, Self>) -> Task<NavigationResult> {
        cx.spawn(async move |this, cx| {
            repeat_while(&this, cx, |router| router.number_of_pushed_views() > 0, Router::pop).await
        })
    }

    /// Dismiss vertical levels one at a time until only the root level is left.
    pub fn multi_dismiss_to_root(&mut self, cx: &mut Context<'_, Self>) -> Task<NavigationResult> {
        cx.spawn(async move |this, cx| {
            repeat_while(
                &this,
                cx,
                |router| router.number_of_presented_views() > 1,
                Router::dismiss,
            )
            .await
        })
    }

    /// Dismiss to the root level one level at a time, then present `route`.
    pub fn dismiss_to_root_and_present(
        &mut self,
        route: Route,
        presentation_type: PresentationType,
        cx: &mut Context<'_, Self>,
    ) -> Task<NavigationResult> {
        cx.spawn(async move |this, cx| {
            let dismissed = repeat_while(
                &this,
                cx,
                |router| router.number_of_presented_views() > 1,
                Router::dismiss,
            )
            .await;
            if matches!(
                dismissed,
                NavigationResult::Dropped | NavigationResult::Error(_)
            ) {
                return dismissed;
            }
            match this.update(cx, |router, cx| router.present(route, presentation_type, cx)) {
                Ok(task) => task.await,
                Err(_) => released(),
            }
        })
    }
}

/// Run `step` and await it as long as `condition` holds.
async fn repeat_while(
    this: &WeakEntity<Router>,
    cx: &mut AsyncApp,
    condition: fn(&Router) -> bool,
    step: fn(&mut Router, &mut Context<'_, Router>) -> Task<NavigationResult>,
) -> NavigationResult {
    let mut outcome = NavigationResult::Ignored;
    loop {
        let task = match this.update(cx, |router, cx| condition(router).then(|| step(router, cx))) {
            Ok(Some(task)) => task,
            Ok(None) => return outcome,
            Err(_) => return released(),
        };
        match task.await {
            NavigationResult::Applied => outcome = NavigationResult::Applied,
            NavigationResult::Ignored => return outcome,
            other => return other,
        }
    }
}

fn released() -> NavigationResult {
    warn_log!("Router released during multi-step navigation");
    NavigationError::RouterReleased.into()
}
