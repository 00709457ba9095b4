//! Navigation state
//!
//! The state is a vertical stack of [`HorizontalPath`]s. Index 0 is the root
//! level; every further path was presented modally on top of the one before
//! it. Each path has a root route plus the routes pushed onto it.
//!
//! ```text
//! paths[2]  C ─ [D]           (sheet)
//! paths[1]  B ─ []            (full screen)
//! paths[0]  A ─ [A1, A2]      (root level)
//! ```
//!
//! All `apply_*` methods edit the state instantly. They are what the gated
//! router operations run once the transition gate has been acquired, and they
//! stay public for state synchronization and for tests.

use crate::error::NavigationError;
use crate::route::Route;
use std::collections::BTreeSet;
use std::fmt;

/// Height a sheet may rest at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SheetDetent {
    /// About half of the available height.
    Medium,
    /// Nearly the whole available height.
    Large,
    /// A fixed height in logical pixels.
    Height(u32),
}

/// How a vertical level is presented over the one below it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PresentationType {
    /// Covers the whole screen.
    FullScreen,
    /// Partially covers the screen, resting at one of `detents`.
    Sheet {
        /// Allowed resting heights. Empty means the platform default.
        detents: BTreeSet<SheetDetent>,
    },
}

impl PresentationType {
    /// A sheet resting at [`SheetDetent::Large`].
    pub fn sheet() -> Self {
        Self::sheet_with([SheetDetent::Large])
    }

    /// A sheet with the given detents.
    pub fn sheet_with(detents: impl IntoIterator<Item = SheetDetent>) -> Self {
        Self::Sheet {
            detents: detents.into_iter().collect(),
        }
    }

    /// Check if this is a sheet presentation.
    pub fn is_sheet(&self) -> bool {
        matches!(self, Self::Sheet { .. })
    }

    /// Check if this is a full-screen presentation.
    pub fn is_full_screen(&self) -> bool {
        matches!(self, Self::FullScreen)
    }
}

impl Default for PresentationType {
    fn default() -> Self {
        Self::sheet()
    }
}

/// One vertical level: a root route and the routes pushed on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalPath {
    /// Routes pushed after the root. Empty means only the root is shown.
    routes: Vec<Route>,
    root: Route,
    presentation_type: PresentationType,
}

impl HorizontalPath {
    /// Create a path showing only `root`.
    pub fn new(root: Route, presentation_type: PresentationType) -> Self {
        Self {
            routes: Vec::new(),
            root,
            presentation_type,
        }
    }

    /// Create a path with routes already pushed onto `root`.
    pub fn with_routes(
        root: Route,
        routes: Vec<Route>,
        presentation_type: PresentationType,
    ) -> Self {
        Self {
            routes,
            root,
            presentation_type,
        }
    }

    /// The root route of this level.
    pub fn root(&self) -> &Route {
        &self.root
    }

    /// Routes pushed on top of the root, bottom first.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// How this level is presented.
    ///
    /// Meaningless for the root level, which is always shown.
    pub fn presentation_type(&self) -> &PresentationType {
        &self.presentation_type
    }

    /// The route currently visible on this level.
    pub fn top(&self) -> &Route {
        self.routes.last().unwrap_or(&self.root)
    }
}

impl fmt::Display for HorizontalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-[", self.root)?;
        for (i, route) in self.routes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", route)?;
        }
        write!(f, "]")
    }
}

/// The full two-dimensional navigation state.
///
/// Invariant: `paths` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    paths: Vec<HorizontalPath>,
}

impl NavigationState {
    /// Create a state showing `root` only.
    pub fn new(root: Route) -> Self {
        // The presentation type of the root level is never used.
        Self {
            paths: vec![HorizontalPath::new(root, PresentationType::FullScreen)],
        }
    }

    /// All vertical levels, root first.
    pub fn paths(&self) -> &[HorizontalPath] {
        &self.paths
    }

    /// Replace all paths.
    ///
    /// # Panics
    ///
    /// Panics if `paths` is empty.
    pub fn set_paths(&mut self, paths: Vec<HorizontalPath>) {
        assert!(
            !paths.is_empty(),
            "There must be at least one path to provide a root screen"
        );
        self.paths = paths;
    }

    /// Replace all paths, rejecting an empty list.
    pub fn try_set_paths(&mut self, paths: Vec<HorizontalPath>) -> Result<(), NavigationError> {
        if paths.is_empty() {
            return Err(NavigationError::EmptyPaths);
        }
        self.paths = paths;
        Ok(())
    }

    fn last_index(&self) -> usize {
        self.paths.len() - 1
    }

    fn top_routes_mut(&mut self) -> &mut Vec<Route> {
        let last = self.last_index();
        &mut self.paths[last].routes
    }

    /// The topmost vertical level.
    pub fn top_path(&self) -> &HorizontalPath {
        &self.paths[self.last_index()]
    }

    /// Number of routes pushed on the topmost level. 0 means only its root is shown.
    pub fn number_of_pushed_views(&self) -> usize {
        self.top_path().routes.len()
    }

    /// Number of vertical levels, always 1 or more.
    pub fn number_of_presented_views(&self) -> usize {
        self.paths.len()
    }

    // ========================================================================
    // Horizontal edits
    // ========================================================================

    /// Replace the routes of the topmost level.
    pub fn apply_set(&mut self, routes: Vec<Route>) {
        *self.top_routes_mut() = routes;
    }

    /// Push a route onto the topmost level.
    pub fn apply_push(&mut self, route: Route) {
        self.top_routes_mut().push(route);
    }

    /// Pop the last route of the topmost level. Returns `None` if nothing was pushed.
    pub fn apply_pop(&mut self) -> Option<Route> {
        self.top_routes_mut().pop()
    }

    /// Remove every pushed route of the topmost level. Returns how many were removed.
    pub fn apply_pop_to_root(&mut self) -> usize {
        let routes = self.top_routes_mut();
        let removed = routes.len();
        routes.clear();
        removed
    }

    /// Remove every route after position `index` of the topmost level.
    ///
    /// Index 0 is the root, so `apply_pop_after(0)` is `apply_pop_to_root`
    /// and index 1 keeps the first pushed route. Does nothing when `index`
    /// is at or past the number of pushed routes. Returns how many were removed.
    pub fn apply_pop_after(&mut self, index: usize) -> usize {
        let Some(amount) = self.number_of_routes_after(index) else {
            return 0;
        };
        let routes = self.top_routes_mut();
        routes.truncate(routes.len() - amount);
        amount
    }

    /// How many routes `apply_pop_after(index)` would remove, `None` for a no-op.
    pub fn number_of_routes_after(&self, index: usize) -> Option<usize> {
        self.number_of_pushed_views()
            .checked_sub(index)
            .filter(|amount| *amount > 0)
    }

    // ========================================================================
    // Vertical edits
    // ========================================================================

    /// Present `route` as the root of a new vertical level.
    pub fn apply_present(&mut self, route: Route, presentation_type: PresentationType) {
        self.paths.push(HorizontalPath::new(route, presentation_type));
    }

    /// Remove the topmost vertical level. The root level is never removed.
    pub fn apply_dismiss(&mut self) -> Option<HorizontalPath> {
        if self.paths.len() <= 1 {
            return None;
        }
        self.paths.pop()
    }

    /// Remove every vertical level after `index`, keeping `paths[..=index]`.
    ///
    /// Does nothing when `index` is the last level or beyond. Returns how
    /// many levels were removed.
    pub fn apply_dismiss_after(&mut self, index: usize) -> usize {
        let keep = index.saturating_add(1);
        if keep >= self.paths.len() {
            return 0;
        }
        let removed = self.paths.len() - keep;
        self.paths.truncate(keep);
        removed
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", path)?;
        }
        write!(f, "]")
    }
}
