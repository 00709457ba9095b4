//! Interactive demo of push/present navigation with a transition gate

#![allow(clippy::needless_pass_by_ref_mut)]

use gpui::prelude::*;
use gpui::{
    div, px, rgb, size, App, AppContext, Application, Bounds, Context, Entity, FontWeight,
    MouseButton, Rgba, SharedString, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_stack_router::{
    info_log, NavigationStep, Navigator, PresentationType, Route, Router, RouterView, SheetDetent,
    ViewScreen,
};
use std::time::Duration;

fn main() {
    env_logger::init();
    info_log!("Starting navigation demo with logging enabled");

    Application::new().run(|cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1000.), px(680.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Stack Router Demo".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(NavigationDemoApp::new),
        )
        .unwrap();

        cx.activate(true);
    });
}

struct NavigationDemoApp {
    router: Entity<Router>,
    view: Entity<RouterView>,
    next_screen: usize,
}

impl NavigationDemoApp {
    fn new(cx: &mut Context<'_, Self>) -> Self {
        let router = cx.new(|_| Router::new(screen("Home", rgb(0xe3_f2_fd))));
        let view = cx.new(|cx| RouterView::new(router.clone(), cx));
        cx.observe(&router, |_, _, cx| cx.notify()).detach();
        Self {
            router,
            view,
            next_screen: 1,
        }
    }

    fn next_route(&mut self) -> Route {
        let palette = [0xfff3e0, 0xe8f5e9, 0xf3e5f5, 0xfffde7, 0xe0f7fa];
        let color = rgb(palette[self.next_screen % palette.len()]);
        let route = screen(format!("Screen {}", self.next_screen), color);
        self.next_screen += 1;
        route
    }
}

impl Render for NavigationDemoApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let status = self.router.read(cx).to_string();
        let busy = self.router.read(cx).is_transitioning();

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0xf5_f5_f5))
            .child(header(status, busy))
            .child(
                div()
                    .flex()
                    .flex_1()
                    .child(sidebar(cx))
                    .child(div().flex_1().child(self.view.clone())),
            )
    }
}

/// A route whose screen shows its name on a colored page with a navigation bar
fn screen(name: impl Into<SharedString>, color: Rgba) -> Route {
    let name: SharedString = name.into();
    let title = name.clone();
    Route::new(
        ViewScreen::new(name.clone(), move |_, _| {
            div()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .size_full()
                .bg(color)
                .child(
                    div()
                        .text_3xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(rgb(0x33_33_33))
                        .child(name.clone()),
                )
                .into_any_element()
        })
        .navigation_bar(move |_, _| {
            div()
                .flex()
                .items_center()
                .h_10()
                .px_4()
                .bg(rgb(0xff_ff_ff))
                .border_b_1()
                .border_color(rgb(0xe0_e0_e0))
                .child(title.clone())
                .into_any_element()
        }),
    )
}

fn header(status: String, busy: bool) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .justify_between()
        .h_16()
        .px_8()
        .bg(rgb(0x21_96_f3))
        .text_color(rgb(0xff_ff_ff))
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .child("Stack Router Demo"),
        )
        .child(
            div()
                .text_sm()
                .child(format!("{status}{}", if busy { "  (settling)" } else { "" })),
        )
}

type Action = fn(&mut NavigationDemoApp, &mut Context<'_, NavigationDemoApp>);

fn sidebar(cx: &mut Context<'_, NavigationDemoApp>) -> impl IntoElement {
    let buttons: [(&str, Action); 15] = [
        ("Push", |app, cx| {
            let route = app.next_route();
            Navigator::push(&app.router, route, cx);
        }),
        ("Pop", |app, cx| Navigator::pop(&app.router, cx)),
        ("Pop to root", |app, cx| Navigator::pop_to_root(&app.router, cx)),
        ("Pop after first", |app, cx| Navigator::pop_after(&app.router, 1, cx)),
        ("Set one screen", |app, cx| {
            let routes = vec![app.next_route()];
            Navigator::set(&app.router, routes, cx);
        }),
        ("Set three screens", |app, cx| {
            let routes = (0..3).map(|_| app.next_route()).collect();
            Navigator::set(&app.router, routes, cx);
        }),
        ("Present sheet", |app, cx| {
            let route = app.next_route();
            let sheet = PresentationType::sheet_with([SheetDetent::Medium, SheetDetent::Large]);
            Navigator::present(&app.router, route, sheet, cx);
        }),
        ("Present medium sheet", |app, cx| {
            let route = app.next_route();
            let sheet = PresentationType::sheet_with([SheetDetent::Medium]);
            Navigator::present(&app.router, route, sheet, cx);
        }),
        ("Present full screen", |app, cx| {
            let route = app.next_route();
            Navigator::present(&app.router, route, PresentationType::FullScreen, cx);
        }),
        ("Dismiss", |app, cx| Navigator::dismiss(&app.router, cx)),
        ("Pop to root one by one", |app, cx| {
            Navigator::multi_pop_to_root(&app.router, cx);
        }),
        ("Dismiss to root one by one", |app, cx| {
            Navigator::multi_dismiss_to_root(&app.router, cx);
        }),
        ("Dismiss all, present", |app, cx| {
            let route = app.next_route();
            Navigator::dismiss_to_root_and_present(
                &app.router,
                route,
                PresentationType::sheet(),
                cx,
            );
        }),
        ("Pop, present, push", |app, cx| {
            let steps = vec![
                NavigationStep::Pop,
                NavigationStep::Present(app.next_route(), PresentationType::sheet()),
                NavigationStep::Wait(Duration::from_millis(300)),
                NavigationStep::Push(app.next_route()),
            ];
            app.router
                .update(cx, |router, cx| router.consecutive_steps(steps, cx))
                .detach();
        }),
        ("Print paths", |app, cx| {
            println!("{}", app.router.read(cx));
        }),
    ];

    div()
        .flex()
        .flex_col()
        .w_64()
        .bg(rgb(0xff_ff_ff))
        .border_r_1()
        .border_color(rgb(0xe0_e0_e0))
        .p_4()
        .gap_2()
        .children(
            buttons
                .into_iter()
                .map(|(label, action)| nav_button(cx, label, action)),
        )
        .child(div().h_px().bg(rgb(0xe0_e0_e0)).my_4())
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x66_66_66))
                .child("Taps during a transition are dropped.")
                .child("Click a sheet's backdrop to dismiss it."),
        )
}

fn nav_button(
    cx: &mut Context<'_, NavigationDemoApp>,
    label: &'static str,
    action: Action,
) -> impl IntoElement {
    div()
        .id(label)
        .flex()
        .items_center()
        .px_4()
        .py_2()
        .rounded_md()
        .cursor_pointer()
        .bg(rgb(0xf5_f5_f5))
        .text_color(rgb(0x33_33_33))
        .hover(|this| this.bg(rgb(0xe3_f2_fd)))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |app, _event, _window, cx| action(app, cx)),
        )
        .child(label)
}
