//! The router entity.
//!
//! [`Router`] owns the [`NavigationState`] and is meant to live in a GPUI
//! entity (`cx.new(|_| Router::new(root))`), which makes the foreground thread
//! its single owner. Observers get notified in two ways:
//!
//! - `cx.observe(&router, ..)` fires on every state change (`cx.notify()`),
//! - `cx.subscribe(&router, ..)` receives a [`NavigationEvent`] describing it.
//!
//! # Gated operations
//!
//! Every navigation operation goes through the [`TransitionGate`]:
//!
//! 1. If another transition is still settling, the request is dropped and the
//!    returned task resolves to [`NavigationResult::Dropped`].
//! 2. Otherwise the state is edited synchronously and observers are notified.
//! 3. The gate stays closed for the settle duration of the operation's
//!    [`RoutingDirection`], after which the returned task resolves to
//!    [`NavigationResult::Applied`].
//!
//! Requests that would not change anything resolve to
//! [`NavigationResult::Ignored`]. A no-op `pop` or `dismiss` still holds the
//! gate for its direction; no-op `pop_to_root`, `pop_after` and `set` are
//! untimed and reopen it at once.
//!
//! The returned [`Task`] does not have to be kept: the router reopens the gate
//! on its own. Call `.detach()` for fire-and-forget use, or use [`Navigator`].
//!
//! # Example
//!
//! ```ignore
//! use gpui_stack_router::{PresentationType, Route, Router};
//!
//! let router = cx.new(|_| Router::new(home));
//! router.update(cx, |router, cx| router.push(details, cx)).detach();
//!
//! // Later, from an async context:
//! let done = router.update(cx, |router, cx| {
//!     router.present(login, PresentationType::sheet(), cx)
//! });
//! done.await;
//! ```

use crate::binding::{PresentationInfo, VerticalBinding};
use crate::error::NavigationResult;
use crate::route::Route;
use crate::state::{HorizontalPath, NavigationState, PresentationType};
use crate::transition::{RoutingDirection, TransitionDurations, TransitionGate, TransitionTicket};
use crate::{debug_log, info_log, trace_log};
use gpui::{App, Context, Entity, EventEmitter, Task, WeakEntity};
use std::fmt;
use std::time::Duration;

/// Outcome of a state edit run under the gate.
enum Edit {
    /// The state changed; hold the gate for this direction.
    Changed(RoutingDirection),
    /// The state is untouched; the gate is still held for this direction.
    Unchanged(RoutingDirection),
}

impl Edit {
    fn horizontal_if_single(removed: usize) -> Self {
        if removed == 0 {
            Self::Unchanged(RoutingDirection::Untimed)
        } else {
            Self::Changed(RoutingDirection::horizontal_if_single(removed, 0))
        }
    }
}

// ============================================================================
// NavigationEvent
// ============================================================================

/// Which operation changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Pop,
    PopToRoot,
    PopAfter,
    Set,
    Present,
    Dismiss,
    /// Levels removed after the user dismissed a modal outside the router.
    DismissAfter,
    /// Paths replaced wholesale via [`Router::set_paths`].
    Replace,
    /// Edited through [`Router::synchronize`].
    Synchronize,
    /// Edited through [`Router::navigate`] with a caller-chosen direction.
    Custom,
}

/// Emitted by the router after every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// The operation that changed the state.
    pub kind: NavigationKind,
    /// Pushed views on the topmost level after the change.
    pub number_of_pushed_views: usize,
    /// Vertical levels after the change.
    pub number_of_presented_views: usize,
}

// ============================================================================
// Router
// ============================================================================

/// Owner of the two-dimensional navigation state.
pub struct Router {
    state: NavigationState,
    gate: TransitionGate,
    durations: TransitionDurations,
    /// Reopens the gate even when the caller dropped the returned task.
    settle_task: Option<Task<()>>,
}

impl EventEmitter<NavigationEvent> for Router {}

impl Router {
    /// Create a router showing `root`.
    pub fn new(root: Route) -> Self {
        Self {
            state: NavigationState::new(root),
            gate: TransitionGate::new(),
            durations: TransitionDurations::default(),
            settle_task: None,
        }
    }

    /// Use custom settle durations.
    pub fn with_durations(mut self, durations: TransitionDurations) -> Self {
        self.durations = durations;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// All vertical levels, root first.
    pub fn paths(&self) -> &[HorizontalPath] {
        self.state.paths()
    }

    /// Number of routes pushed on the topmost level.
    pub fn number_of_pushed_views(&self) -> usize {
        self.state.number_of_pushed_views()
    }

    /// Number of vertical levels, at least 1.
    pub fn number_of_presented_views(&self) -> usize {
        self.state.number_of_presented_views()
    }

    /// The settle durations in use.
    pub fn durations(&self) -> &TransitionDurations {
        &self.durations
    }

    /// Change the settle durations for future transitions.
    pub fn set_durations(&mut self, durations: TransitionDurations) {
        self.durations = durations;
    }

    /// Whether a transition is currently settling, in which case new
    /// requests are dropped.
    pub fn is_transitioning(&self) -> bool {
        !self.gate.is_open()
    }

    // ========================================================================
    // Horizontal navigation
    // ========================================================================

    /// Push `route` onto the topmost level.
    pub fn push(&mut self, route: Route, cx: &mut Context<'_, Self>) -> Task<NavigationResult> {
        self.transition(NavigationKind::Push, cx, move |state| {
            state.apply_push(route);
            Edit::Changed(RoutingDirection::Horizontal)
        })
    }

    /// Pop the last route of the topmost level.
    ///
    /// Ignored when nothing is pushed, but the gate is held for the
    /// horizontal duration either way.
    pub fn pop(&mut self, cx: &mut Context<'_, Self>) -> Task<NavigationResult> {
        self.transition(NavigationKind::Pop, cx, |state| match state.apply_pop() {
            Some(_) => Edit::Changed(RoutingDirection::Horizontal),
            None => Edit::Unchanged(RoutingDirection::Horizontal),
        })
    }

    /// Remove all pushed routes of the topmost level.
    ///
    /// Only animated when exactly one route was pushed.
    pub fn pop_to_root(&mut self, cx: &mut Context<'_, Self>) -> Task<NavigationResult> {
        self.transition(NavigationKind::PopToRoot, cx, |state| {
            Edit::horizontal_if_single(state.apply_pop_to_root())
        })
    }

    /// Remove all routes of the topmost level after position `index`.
    ///
    /// Index 0 is the root, so `pop_after(0)` behaves like
    /// [`pop_to_root`](Self::pop_to_root) and `pop_after(1)` keeps the first
    /// pushed route. Ignored when `index` is at or past the number of pushed
    /// routes. Only animated when exactly one route is removed.
    pub fn pop_after(
        &mut self,
        index: usize,
        cx: &mut Context<'_, Self>,
    ) -> Task<NavigationResult> {
        self.transition(NavigationKind::PopAfter, cx, move |state| {
            Edit::horizontal_if_single(state.apply_pop_after(index))
        })
    }

    /// Replace the routes of the topmost level. `routes` may be empty.
    ///
    /// Animated as a single push or pop when the number of views changes by
    /// exactly one, applied without animation otherwise.
    pub fn set(
        &mut self,
        routes: Vec<Route>,
        cx: &mut Context<'_, Self>,
    ) -> Task<NavigationResult> {
        self.transition(NavigationKind::Set, cx, move |state| {
            if state.top_path().routes() == routes.as_slice() {
                return Edit::Unchanged(RoutingDirection::Untimed);
            }
            let before = state.number_of_pushed_views();
            let after = routes.len();
            state.apply_set(routes);
            Edit::Changed(RoutingDirection::horizontal_if_single(before, after))
        })
    }

    // ========================================================================
    // Vertical navigation
    // ========================================================================

    /// Present `route` as the root of a new vertical level.
    pub fn present(
        &mut self,
        route: Route,
        presentation_type: PresentationType,
        cx: &mut Context<'_, Self>,
    ) -> Task<NavigationResult> {
        self.transition(NavigationKind::Present, cx, move |state| {
            state.apply_present(route, presentation_type);
            Edit::Changed(RoutingDirection::Vertical)
        })
    }

    /// Dismiss the topmost vertical level.
    ///
    /// Ignored at the root level, which cannot be dismissed, but the gate is
    /// held for the vertical duration either way.
    pub fn dismiss(&mut self, cx: &mut Context<'_, Self>) -> Task<NavigationResult> {
        self.transition(NavigationKind::Dismiss, cx, |state| {
            match state.apply_dismiss() {
                Some(_) => Edit::Changed(RoutingDirection::Vertical),
                None => Edit::Unchanged(RoutingDirection::Vertical),
            }
        })
    }

    // ========================================================================
    // Custom transitions
    // ========================================================================

    /// Run `edit` under the gate and hold the gate for `direction`.
    ///
    /// For transitions outside the built-in operations, typically with a
    /// [`RoutingDirection::Custom`] duration. Resolves to
    /// [`NavigationResult::Ignored`] when `edit` leaves the state untouched;
    /// the gate is held for `direction` in both cases.
    pub fn navigate(
        &mut self,
        direction: RoutingDirection,
        cx: &mut Context<'_, Self>,
        edit: impl FnOnce(&mut NavigationState),
    ) -> Task<NavigationResult> {
        self.transition(NavigationKind::Custom, cx, move |state| {
            let before = state.clone();
            edit(state);
            if *state == before {
                Edit::Unchanged(direction)
            } else {
                Edit::Changed(direction)
            }
        })
    }

    /// Hold the gate for `direction` without changing the state.
    ///
    /// Requests issued meanwhile are dropped. Resolves to
    /// [`NavigationResult::Ignored`] once the pause is over, or to
    /// [`NavigationResult::Dropped`] if another transition was in flight.
    pub fn pause(
        &mut self,
        direction: RoutingDirection,
        cx: &mut Context<'_, Self>,
    ) -> Task<NavigationResult> {
        self.navigate(direction, cx, |_| {})
    }

    // ========================================================================
    // Ungated state changes
    // ========================================================================

    /// Replace all paths without a transition.
    ///
    /// # Panics
    ///
    /// Panics if `paths` is empty.
    pub fn set_paths(&mut self, paths: Vec<HorizontalPath>, cx: &mut Context<'_, Self>) {
        self.state.set_paths(paths);
        self.state_changed(NavigationKind::Replace, cx);
    }

    /// Edit the state directly, bypassing the gate, and notify observers if
    /// anything changed.
    ///
    /// Meant for layers that must mirror a change that already happened
    /// elsewhere. Never waits and never touches a transition in flight.
    pub fn synchronize<R>(
        &mut self,
        cx: &mut Context<'_, Self>,
        edit: impl FnOnce(&mut NavigationState) -> R,
    ) -> R {
        let before = self.state.clone();
        let result = edit(&mut self.state);
        if self.state != before {
            self.state_changed(NavigationKind::Synchronize, cx);
        }
        result
    }

    /// Drop every vertical level after `index` because it is already gone
    /// from screen, e.g. a sheet the user swiped away.
    ///
    /// Bypasses the gate and never waits: the animation has already happened.
    pub fn reconcile_dismiss_after(&mut self, index: usize, cx: &mut Context<'_, Self>) {
        let removed = self.state.apply_dismiss_after(index);
        if removed > 0 {
            debug_log!(
                "Reconciled {} externally dismissed level(s) after index {}",
                removed,
                index
            );
            self.state_changed(NavigationKind::DismissAfter, cx);
        }
    }

    // ========================================================================
    // Binding
    // ========================================================================

    /// Create the presentation binding for vertical level `index`.
    pub fn vertical_binding(&self, index: usize, cx: &Context<'_, Self>) -> VerticalBinding {
        VerticalBinding::from_weak(cx.weak_entity(), index)
    }

    /// Presentation descriptor of level `index`, `None` if there is no such level.
    pub(crate) fn presentation_info(
        &self,
        index: usize,
        router: WeakEntity<Self>,
    ) -> Option<PresentationInfo> {
        let path = self.state.paths().get(index)?;
        Some(PresentationInfo::new(
            index,
            path.presentation_type().clone(),
            router,
        ))
    }

    // ========================================================================
    // Transition pipeline
    // ========================================================================

    /// Run `apply` under the gate and hold the gate for the returned direction.
    fn transition(
        &mut self,
        kind: NavigationKind,
        cx: &mut Context<'_, Self>,
        apply: impl FnOnce(&mut NavigationState) -> Edit,
    ) -> Task<NavigationResult> {
        let Some(ticket) = self.gate.try_close() else {
            debug_log!("Router busy, dropping {:?}", kind);
            return Task::ready(NavigationResult::Dropped);
        };

        let (direction, result) = match apply(&mut self.state) {
            Edit::Changed(direction) => {
                self.state_changed(kind, cx);
                (direction, NavigationResult::Applied)
            }
            Edit::Unchanged(direction) => {
                debug_log!("Ignoring {:?}: nothing to change", kind);
                (direction, NavigationResult::Ignored)
            }
        };

        let duration = direction.duration(&self.durations);
        if duration.is_zero() {
            self.gate.release(ticket);
            return Task::ready(result);
        }

        trace_log!("Gate closed for {:?} transition ({:?})", direction, duration);
        // Spawned first so its equal-deadline timer reopens the gate before the
        // caller's task resolves.
        self.settle_task = Some(Self::settle(ticket, duration, cx));
        cx.spawn(async move |_, cx| {
            cx.background_executor().timer(duration).await;
            result
        })
    }

    /// Wait `duration`, then reopen the gate if `ticket` still holds it.
    fn settle(
        ticket: TransitionTicket,
        duration: Duration,
        cx: &mut Context<'_, Self>,
    ) -> Task<()> {
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            this.update(cx, |router, _| router.finish_transition(ticket)).ok();
        })
    }

    fn finish_transition(&mut self, ticket: TransitionTicket) {
        if self.gate.release(ticket) {
            trace_log!("Gate reopened");
            self.settle_task = None;
        }
    }

    fn state_changed(&mut self, kind: NavigationKind, cx: &mut Context<'_, Self>) {
        info_log!("{:?} applied: {}", kind, self.state);
        cx.emit(NavigationEvent {
            kind,
            number_of_pushed_views: self.state.number_of_pushed_views(),
            number_of_presented_views: self.state.number_of_presented_views(),
        });
        cx.notify();
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("state", &self.state)
            .field("gate", &self.gate)
            .field("durations", &self.durations)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Fire-and-forget wrappers around the gated [`Router`] operations.
///
/// Each call starts the transition and detaches its task. Whether the request
/// was applied, ignored or dropped is not reported; await the task returned
/// by the [`Router`] method itself when that matters.
///
/// ```ignore
/// div().on_mouse_down(MouseButton::Left, move |_, _, cx| {
///     Navigator::pop(&router, cx);
/// })
/// ```
pub struct Navigator;

impl Navigator {
    /// Push `route` onto the topmost level.
    pub fn push(router: &Entity<Router>, route: Route, cx: &mut App) {
        router
            .update(cx, |router, cx| router.push(route, cx))
            .detach();
    }

    /// Pop the last route of the topmost level.
    pub fn pop(router: &Entity<Router>, cx: &mut App) {
        router.update(cx, |router, cx| router.pop(cx)).detach();
    }

    /// Remove all pushed routes of the topmost level.
    pub fn pop_to_root(router: &Entity<Router>, cx: &mut App) {
        router.update(cx, |router, cx| router.pop_to_root(cx)).detach();
    }

    /// Remove all routes of the topmost level after `index`.
    pub fn pop_after(router: &Entity<Router>, index: usize, cx: &mut App) {
        router
            .update(cx, |router, cx| router.pop_after(index, cx))
            .detach();
    }

    /// Replace the routes of the topmost level.
    pub fn set(router: &Entity<Router>, routes: Vec<Route>, cx: &mut App) {
        router
            .update(cx, |router, cx| router.set(routes, cx))
            .detach();
    }

    /// Present `route` as a new vertical level.
    pub fn present(
        router: &Entity<Router>,
        route: Route,
        presentation_type: PresentationType,
        cx: &mut App,
    ) {
        router
            .update(cx, |router, cx| router.present(route, presentation_type, cx))
            .detach();
    }

    /// Dismiss the topmost vertical level.
    pub fn dismiss(router: &Entity<Router>, cx: &mut App) {
        router.update(cx, |router, cx| router.dismiss(cx)).detach();
    }

    /// Pop the topmost level's routes one by one, each animated.
    pub fn multi_pop_to_root(router: &Entity<Router>, cx: &mut App) {
        router
            .update(cx, |router, cx| router.multi_pop_to_root(cx))
            .detach();
    }

    /// Dismiss every presented level one by one, each animated.
    pub fn multi_dismiss_to_root(router: &Entity<Router>, cx: &mut App) {
        router
            .update(cx, |router, cx| router.multi_dismiss_to_root(cx))
            .detach();
    }

    /// Dismiss to the root level, then present `route`.
    pub fn dismiss_to_root_and_present(
        router: &Entity<Router>,
        route: Route,
        presentation_type: PresentationType,
        cx: &mut App,
    ) {
        router
            .update(cx, |router, cx| {
                router.dismiss_to_root_and_present(route, presentation_type, cx)
            })
            .detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{div, AppContext, IntoElement, TestAppContext};

    fn route(id: &'static str) -> Route {
        Route::view(id, |_, _| div().into_any_element())
    }

    #[gpui::test]
    fn test_push_applies_synchronously(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));

        router.update(cx, |router, cx| router.push(route("b"), cx).detach());

        router.read_with(cx, |router, _| {
            assert_eq!(router.paths()[0].routes(), &[route("b")]);
            assert!(router.is_transitioning());
        });
    }

    #[gpui::test]
    fn test_gate_reopens_after_horizontal_duration(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));
        router.update(cx, |router, cx| router.push(route("b"), cx).detach());

        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_HORIZONTAL - Duration::from_millis(1));
        cx.run_until_parked();
        assert!(router.read_with(cx, |router, _| router.is_transitioning()));

        cx.executor().advance_clock(Duration::from_millis(1));
        cx.run_until_parked();
        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));
    }

    #[gpui::test]
    fn test_gate_reopens_when_task_is_dropped(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));
        let task = router.update(cx, |router, cx| {
            router.present(route("b"), PresentationType::FullScreen, cx)
        });
        drop(task);

        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_VERTICAL);
        cx.run_until_parked();

        router.read_with(cx, |router, _| {
            assert!(!router.is_transitioning());
            assert_eq!(router.number_of_presented_views(), 2);
        });
    }

    #[gpui::test]
    async fn test_overlapping_request_is_dropped(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));

        let first = router.update(cx, |router, cx| router.push(route("b"), cx));
        let second = router.update(cx, |router, cx| router.push(route("c"), cx));

        assert_eq!(second.await, NavigationResult::Dropped);
        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_HORIZONTAL);
        assert_eq!(first.await, NavigationResult::Applied);

        router.read_with(cx, |router, _| {
            assert_eq!(router.paths()[0].routes(), &[route("b")]);
        });
    }

    #[gpui::test]
    async fn test_noop_pop_still_holds_gate(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));

        let pop = router.update(cx, |router, cx| router.pop(cx));
        let push = router.update(cx, |router, cx| router.push(route("b"), cx));
        router.read_with(cx, |router, _| {
            assert!(router.is_transitioning());
            assert!(router.paths()[0].routes().is_empty());
        });

        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_HORIZONTAL);
        cx.run_until_parked();
        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));
        assert_eq!(pop.await, NavigationResult::Ignored);
        assert_eq!(push.await, NavigationResult::Dropped);
    }

    #[gpui::test]
    fn test_noop_dismiss_holds_gate_for_vertical_duration(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));
        router.update(cx, |router, cx| router.dismiss(cx).detach());

        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_VERTICAL - Duration::from_millis(1));
        cx.run_until_parked();
        assert!(router.read_with(cx, |router, _| router.is_transitioning()));

        cx.executor().advance_clock(Duration::from_millis(1));
        cx.run_until_parked();
        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));
    }

    #[gpui::test]
    async fn test_untimed_noops_reopen_gate_immediately(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));

        let pop_to_root = router.update(cx, |router, cx| router.pop_to_root(cx));
        assert_eq!(pop_to_root.await, NavigationResult::Ignored);
        let pop_after = router.update(cx, |router, cx| router.pop_after(3, cx));
        assert_eq!(pop_after.await, NavigationResult::Ignored);
        let set = router.update(cx, |router, cx| router.set(Vec::new(), cx));
        assert_eq!(set.await, NavigationResult::Ignored);

        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));
    }

    #[gpui::test]
    fn test_navigate_holds_gate_for_custom_duration(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));
        router.update(cx, |router, cx| {
            router
                .navigate(RoutingDirection::custom_secs(0.2), cx, |state| {
                    state.apply_push(route("b"));
                    state.apply_push(route("c"));
                })
                .detach();
        });
        assert_eq!(
            router.read_with(cx, |router, _| router.number_of_pushed_views()),
            2
        );

        cx.executor().advance_clock(Duration::from_millis(199));
        cx.run_until_parked();
        assert!(router.read_with(cx, |router, _| router.is_transitioning()));

        cx.executor().advance_clock(Duration::from_millis(1));
        cx.run_until_parked();
        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));
    }

    #[gpui::test]
    async fn test_pause_resolves_ignored(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));

        let pause = router.update(cx, |router, cx| {
            router.pause(RoutingDirection::Custom(Duration::from_millis(40)), cx)
        });
        cx.executor().advance_clock(Duration::from_millis(40));
        assert_eq!(pause.await, NavigationResult::Ignored);
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[]]");
    }

    #[gpui::test]
    async fn test_untimed_set_reopens_gate_immediately(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));

        let set = router.update(cx, |router, cx| {
            router.set(vec![route("1"), route("2"), route("3")], cx)
        });
        assert_eq!(set.await, NavigationResult::Applied);
        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));

        let set = router.update(cx, |router, cx| {
            router.set(vec![route("1"), route("2")], cx)
        });
        assert!(router.read_with(cx, |router, _| router.is_transitioning()));
        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_HORIZONTAL);
        assert_eq!(set.await, NavigationResult::Applied);
        assert_eq!(
            router.read_with(cx, |router, _| router.number_of_pushed_views()),
            2
        );
    }

    #[gpui::test]
    fn test_custom_durations(cx: &mut TestAppContext) {
        let durations = TransitionDurations::default().with_vertical(Duration::from_millis(50));
        let router = cx.new(|_| Router::new(route("a")).with_durations(durations));
        router.update(cx, |router, cx| {
            router
                .present(route("b"), PresentationType::sheet(), cx)
                .detach();
        });

        cx.executor().advance_clock(Duration::from_millis(50));
        cx.run_until_parked();
        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));
    }

    #[gpui::test]
    fn test_reconcile_bypasses_gate(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));
        router.update(cx, |router, cx| {
            router.synchronize(cx, |state| {
                state.apply_present(route("b"), PresentationType::sheet());
                state.apply_present(route("c"), PresentationType::sheet());
            });
            router.dismiss(cx).detach();
            assert!(router.is_transitioning());
            router.reconcile_dismiss_after(0, cx);
        });

        router.read_with(cx, |router, _| {
            assert_eq!(router.number_of_presented_views(), 1);
            assert!(router.is_transitioning());
        });
    }

    #[gpui::test]
    fn test_navigator_starts_transitions(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));
        let horizontal = TransitionDurations::DEFAULT_HORIZONTAL;
        let vertical = TransitionDurations::DEFAULT_VERTICAL;

        cx.update(|cx| Navigator::push(&router, route("b"), cx));
        cx.update(|cx| Navigator::push(&router, route("dropped"), cx));
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[b]]");
        cx.executor().advance_clock(horizontal);
        cx.run_until_parked();

        cx.update(|cx| Navigator::set(&router, vec![route("b"), route("c"), route("d")], cx));
        cx.update(|cx| Navigator::pop_after(&router, 1, cx));
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[b]]");
        cx.update(|cx| Navigator::pop(&router, cx));
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[]]");
        cx.executor().advance_clock(horizontal);
        cx.run_until_parked();

        cx.update(|cx| Navigator::present(&router, route("s"), PresentationType::sheet(), cx));
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[], s-[]]");
        cx.executor().advance_clock(vertical);
        cx.run_until_parked();

        cx.update(|cx| Navigator::dismiss(&router, cx));
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[]]");
        cx.executor().advance_clock(vertical);
        cx.run_until_parked();

        cx.update(|cx| Navigator::set(&router, vec![route("b"), route("c")], cx));
        cx.update(|cx| Navigator::pop_to_root(&router, cx));
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[]]");
        assert!(!router.read_with(cx, |router, _| router.is_transitioning()));
    }

    #[gpui::test]
    fn test_navigator_multi_step_helpers(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("a")));
        router.update(cx, |router, cx| {
            router.synchronize(cx, |state| {
                state.apply_present(route("b"), PresentationType::sheet());
                state.apply_present(route("c"), PresentationType::sheet());
            });
        });

        cx.update(|cx| {
            Navigator::dismiss_to_root_and_present(
                &router,
                route("d"),
                PresentationType::FullScreen,
                cx,
            );
        });
        for _ in 0..3 {
            cx.executor()
                .advance_clock(TransitionDurations::DEFAULT_VERTICAL);
            cx.run_until_parked();
        }
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[], d-[]]");
        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_VERTICAL);
        cx.run_until_parked();

        cx.update(|cx| Navigator::multi_dismiss_to_root(&router, cx));
        cx.run_until_parked();
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[]]");
        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_VERTICAL);
        cx.run_until_parked();

        router.update(cx, |router, cx| {
            router.synchronize(cx, |state| state.apply_set(vec![route("b"), route("c")]));
        });
        cx.update(|cx| Navigator::multi_pop_to_root(&router, cx));
        cx.run_until_parked();
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[b]]");
        cx.executor()
            .advance_clock(TransitionDurations::DEFAULT_HORIZONTAL);
        cx.run_until_parked();
        assert_eq!(router.read_with(cx, |router, _| router.to_string()), "[a-[]]");
    }

    #[gpui::test]
    fn test_display(cx: &mut TestAppContext) {
        let router = cx.new(|_| Router::new(route("A")));
        router.update(cx, |router, cx| {
            router.synchronize(cx, |state| {
                state.apply_push(route("B"));
                state.apply_present(route("C"), PresentationType::sheet());
            });
        });

        let description = router.read_with(cx, |router, _| router.to_string());
        assert_eq!(description, "[A-[B], C-[]]");
    }
}
