//! Screens and routes.
//!
//! A [`Screen`] is supplied by the application and knows how to render itself.
//! A [`Route`] wraps a screen so the router can store, compare and hash it.
//! The router never looks inside a screen: it only uses the screen's id,
//! which is what gives a route its identity.
//!
//! # Example
//!
//! ```ignore
//! use gpui::{div, IntoElement, ParentElement};
//! use gpui_stack_router::{Route, ViewScreen};
//!
//! let settings = Route::view("settings", |_window, _cx| {
//!     div().child("Settings").into_any_element()
//! });
//!
//! let profile = Route::new(
//!     ViewScreen::new("profile", |_, _| div().child("Profile").into_any_element())
//!         .navigation_bar(|_, _| div().child("Profile").into_any_element()),
//! );
//! ```

use gpui::{AnyElement, App, SharedString, Window};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Renderable capability behind a [`Route`].
///
/// Only [`id`](Self::id) and [`content`](Self::content) are required; the
/// overlay and navigation bar default to `None`.
pub trait Screen: 'static {
    /// Unique identifier distinguishing this screen from any other.
    ///
    /// Two routes whose screens share an id are the same route.
    fn id(&self) -> SharedString;

    /// The screen's content.
    fn content(&self, window: &mut Window, cx: &mut App) -> AnyElement;

    /// Element drawn above both the content and the navigation bar.
    fn overlay(&self, _window: &mut Window, _cx: &mut App) -> Option<AnyElement> {
        None
    }

    /// Custom navigation bar shown above the content.
    ///
    /// Returning `None` means the screen has no navigation bar.
    fn navigation_bar(&self, _window: &mut Window, _cx: &mut App) -> Option<AnyElement> {
        None
    }
}

type ElementBuilder = Box<dyn Fn(&mut Window, &mut App) -> AnyElement>;

/// A [`Screen`] assembled from closures.
pub struct ViewScreen {
    id: SharedString,
    content: ElementBuilder,
    overlay: Option<ElementBuilder>,
    navigation_bar: Option<ElementBuilder>,
}

impl ViewScreen {
    /// Create a screen from an id and a content builder.
    pub fn new<F>(id: impl Into<SharedString>, content: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + 'static,
    {
        Self {
            id: id.into(),
            content: Box::new(content),
            overlay: None,
            navigation_bar: None,
        }
    }

    /// Set the overlay builder.
    pub fn overlay<F>(mut self, overlay: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + 'static,
    {
        self.overlay = Some(Box::new(overlay));
        self
    }

    /// Set the navigation bar builder.
    pub fn navigation_bar<F>(mut self, navigation_bar: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + 'static,
    {
        self.navigation_bar = Some(Box::new(navigation_bar));
        self
    }
}

impl Screen for ViewScreen {
    fn id(&self) -> SharedString {
        self.id.clone()
    }

    fn content(&self, window: &mut Window, cx: &mut App) -> AnyElement {
        (self.content)(window, cx)
    }

    fn overlay(&self, window: &mut Window, cx: &mut App) -> Option<AnyElement> {
        self.overlay.as_ref().map(|build| build(window, cx))
    }

    fn navigation_bar(&self, window: &mut Window, cx: &mut App) -> Option<AnyElement> {
        self.navigation_bar.as_ref().map(|build| build(window, cx))
    }
}

/// An immutable, cheaply clonable handle to a screen to show.
///
/// Equality and hashing use the screen id only.
#[derive(Clone)]
pub struct Route {
    id: SharedString,
    screen: Rc<dyn Screen>,
}

impl Route {
    /// Wrap a screen into a route.
    pub fn new(screen: impl Screen) -> Self {
        let id = screen.id();
        Self {
            id,
            screen: Rc::new(screen),
        }
    }

    /// Create a route backed by a [`ViewScreen`] with only content.
    pub fn view<F>(id: impl Into<SharedString>, content: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + 'static,
    {
        Self::new(ViewScreen::new(id, content))
    }

    /// The screen id, which is this route's identity.
    pub fn id(&self) -> &SharedString {
        &self.id
    }

    /// The wrapped screen.
    pub fn screen(&self) -> &dyn Screen {
        self.screen.as_ref()
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Route").field(&self.id).finish()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
