//! Presentation bindings for renderers.
//!
//! A renderer asks, for every vertical level `i`, whether a modal is currently
//! shown there and how. [`VerticalBinding::get`] answers with a
//! [`PresentationInfo`], or `None` when the level does not exist.
//!
//! When the user dismisses a modal in a way the router did not perform (a
//! backdrop click, a swipe), the renderer calls
//! [`PresentationInfo::dismiss`]. That truncates the state back to the level
//! below without touching the transition gate and without waiting, because
//! the dismissal has already happened on screen.
//!
//! Bindings hold a [`WeakEntity`], so they never keep a router alive. Once the
//! router is released, `get` returns `None` and `dismiss` does nothing.

use crate::router::Router;
use crate::state::PresentationType;
use gpui::{App, Entity, WeakEntity};
use std::fmt;

/// Descriptor of a shown vertical level.
#[derive(Clone)]
pub struct PresentationInfo {
    index: usize,
    presentation_type: PresentationType,
    router: WeakEntity<Router>,
}

impl PresentationInfo {
    pub(crate) fn new(
        index: usize,
        presentation_type: PresentationType,
        router: WeakEntity<Router>,
    ) -> Self {
        Self {
            index,
            presentation_type,
            router,
        }
    }

    /// The vertical level this describes. Also its identity.
    pub fn index(&self) -> usize {
        self.index
    }

    /// How the level is presented.
    pub fn presentation_type(&self) -> &PresentationType {
        &self.presentation_type
    }

    /// Reconcile the router after the user dismissed this level.
    ///
    /// Removes this level and everything above it. Does nothing for the root
    /// level or when the router has been released.
    pub fn dismiss(&self, cx: &mut App) {
        dismiss_level(&self.router, self.index, cx);
    }

    /// The [`dismiss`](Self::dismiss) action as a standalone callback.
    pub fn on_dismiss(&self) -> impl Fn(&mut App) + 'static {
        let router = self.router.clone();
        let index = self.index;
        move |cx| dismiss_level(&router, index, cx)
    }
}

fn dismiss_level(router: &WeakEntity<Router>, index: usize, cx: &mut App) {
    let Some(below) = index.checked_sub(1) else {
        return;
    };
    router
        .update(cx, |router, cx| router.reconcile_dismiss_after(below, cx))
        .ok();
}

impl PartialEq for PresentationInfo {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.presentation_type == other.presentation_type
    }
}

impl fmt::Debug for PresentationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationInfo")
            .field("index", &self.index)
            .field("presentation_type", &self.presentation_type)
            .finish_non_exhaustive()
    }
}

/// Non-owning view of one vertical level of a router.
#[derive(Clone)]
pub struct VerticalBinding {
    router: WeakEntity<Router>,
    index: usize,
}

impl VerticalBinding {
    /// Bind to level `index` of `router`.
    pub fn new(router: &Entity<Router>, index: usize) -> Self {
        Self::from_weak(router.downgrade(), index)
    }

    pub(crate) fn from_weak(router: WeakEntity<Router>, index: usize) -> Self {
        Self { router, index }
    }

    /// The bound vertical level.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current descriptor of the bound level.
    ///
    /// `None` if the level is not shown or the router was released.
    pub fn get(&self, cx: &App) -> Option<PresentationInfo> {
        let router = self.router.upgrade()?;
        router
            .read(cx)
            .presentation_info(self.index, self.router.clone())
    }
}

impl fmt::Debug for VerticalBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerticalBinding")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
