//! # gpui-stack-router
//!
//! Two-dimensional navigation stack for [GPUI](https://gpui.rs).
//!
//! The state is a non-empty list of vertical levels ([`HorizontalPath`]).
//! Each level has a root screen and zero or more screens pushed on top of it;
//! every level after the first is presented modally over the one below, as a
//! full-screen cover or a sheet:
//!
//! ```text
//! paths[0]  Home ─ Settings ─ About        (push / pop)
//!    │
//! paths[1]  Login ─ Recover                (present / dismiss, sheet)
//! ```
//!
//! [`Router`] owns that state inside a GPUI entity. Its operations are
//! serialized by a [`TransitionGate`]: while one transition is settling, any
//! overlapping request is dropped, so rapid taps can never corrupt the
//! visible hierarchy. Dismissals the user performs directly (dragging a sheet
//! closed) are mirrored back through a [`VerticalBinding`] without waiting on
//! the gate.
//!
//! # Quick start
//!
//! ```ignore
//! use gpui::*;
//! use gpui_stack_router::{Navigator, PresentationType, Route, Router, RouterView};
//!
//! Application::new().run(|cx: &mut App| {
//!     let home = Route::view("home", |_, _| div().child("Home").into_any_element());
//!     let router = cx.new(|_| Router::new(home));
//!
//!     cx.open_window(WindowOptions::default(), |_, cx| {
//!         cx.new(|cx| RouterView::new(router.clone(), cx))
//!     })
//!     .unwrap();
//!
//!     let login = Route::view("login", |_, _| div().child("Login").into_any_element());
//!     Navigator::present(&router, login, PresentationType::sheet(), cx);
//! });
//! ```
//!
//! # Feature flags
//!
//! - `log` (default): log through the `log` crate.
//! - `tracing`: log through the `tracing` crate instead.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod logging;

pub mod binding;
pub mod error;
pub mod route;
pub mod router;
pub mod state;
pub mod steps;
pub mod transition;
pub mod widgets;

pub use binding::{PresentationInfo, VerticalBinding};
pub use error::{NavigationError, NavigationResult};
pub use route::{Route, Screen, ViewScreen};
pub use router::{NavigationEvent, NavigationKind, Navigator, Router};
pub use state::{HorizontalPath, NavigationState, PresentationType, SheetDetent};
pub use steps::NavigationStep;
pub use transition::{RoutingDirection, TransitionDurations, TransitionGate, TransitionTicket};
pub use widgets::RouterView;
