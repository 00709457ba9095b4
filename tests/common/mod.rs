//! Test utilities for router integration tests
//!
//! Provides route fixtures and state assertions shared by the test binaries.

#![allow(dead_code)]

use gpui::*;
use gpui_stack_router::*;

/// Install a test logger once; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a plain content-only route
pub fn route(id: &'static str) -> Route {
    Route::view(id, move |_, _| div().child(id).into_any_element())
}

/// Create a route whose screen has a navigation bar and an overlay
pub fn decorated_route(id: &'static str) -> Route {
    Route::new(
        ViewScreen::new(id, move |_, _| div().child(id).into_any_element())
            .navigation_bar(|_, _| div().child("bar").into_any_element())
            .overlay(|_, _| div().child("overlay").into_any_element()),
    )
}

/// Create a router entity showing `root`
pub fn new_router(cx: &mut TestAppContext, root: &'static str) -> Entity<Router> {
    cx.new(|_| Router::new(route(root)))
}

/// Apply `edit` to the router state without a transition
pub fn seed(
    router: &Entity<Router>,
    cx: &mut TestAppContext,
    edit: impl FnOnce(&mut NavigationState),
) {
    router.update(cx, |router, cx| router.synchronize(cx, edit));
}

/// Ids of every level, root first, each followed by its pushed routes
pub fn snapshot(router: &Entity<Router>, cx: &TestAppContext) -> Vec<Vec<String>> {
    router.read_with(cx, |router, _| {
        router
            .paths()
            .iter()
            .map(|path| {
                std::iter::once(path.root())
                    .chain(path.routes())
                    .map(|route| route.id().to_string())
                    .collect()
            })
            .collect()
    })
}

/// Let the current transition settle and all tasks run
pub fn settle(cx: &mut TestAppContext, duration: std::time::Duration) {
    cx.executor().advance_clock(duration);
    cx.run_until_parked();
}
