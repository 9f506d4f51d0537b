//! GPUI view hosting one chart session.
//!
//! The view starts the one-shot load on the background executor, paints the session in a
//! canvas and feeds it pointer and resize events. The session is a gpui entity the view
//! observes, so any session change re-renders bars, axes and tooltip together. Every
//! subscription and the load task are owned by the view and released when it is dropped.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::captions::CaptionProvider;
use crate::data_source::DataSource;
use crate::data_types::{ChartConfig, ContainerSize};
use crate::rendering::{paint_axes, paint_bars};
use crate::responsive::{ResizeHub, ResponsiveController};
use crate::session::ChartSession;
use crate::theme::ChartTheme;
use crate::utils::PixelsExt;

pub struct BarChartView {
    session: Entity<ChartSession>,
    pub theme: ChartTheme,

    container: Rc<Cell<ContainerSize>>,
    container_origin: Rc<Cell<Point<Pixels>>>,
    resize_hub: Entity<ResizeHub>,

    _responsive: ResponsiveController,
    _session_changed: Subscription,
    _window_bounds: Subscription,
    _load: Task<()>,
}

impl BarChartView {
    pub fn new(
        source: Arc<dyn DataSource>,
        config: ChartConfig,
        captions: impl CaptionProvider + 'static,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let session = cx.new(|_| ChartSession::new(config, captions));
        let container = Rc::new(Cell::new(ContainerSize::default()));
        let resize_hub = cx.new(|_| ResizeHub);
        let responsive =
            ResponsiveController::attach(&resize_hub, session.clone(), container.clone(), cx);
        let session_changed = cx.observe(&session, |_, _, cx| cx.notify());

        // A window resize only schedules layout; the canvas measures the container and fires
        // the hub if its size actually changed.
        let window_bounds = cx.observe_window_bounds(window, |_, _, cx| cx.notify());

        tracing::debug!(source = %source.describe(), "loading chart data");
        let load = cx.background_executor().spawn(async move { source.load() });
        let load = cx.spawn(async move |this, cx| {
            let result = load.await;
            this.update(cx, |view, cx| {
                view.session.update(cx, |session, cx| {
                    session.finish_load(result);
                    cx.notify();
                });
            })
            .ok();
        });

        Self {
            session,
            theme: ChartTheme::default(),
            container,
            container_origin: Rc::new(Cell::new(Point::default())),
            resize_hub,
            _responsive: responsive,
            _session_changed: session_changed,
            _window_bounds: window_bounds,
            _load: load,
        }
    }

    pub fn session(&self) -> Entity<ChartSession> {
        self.session.clone()
    }

    fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let local = event.position - self.container_origin.get();
        self.session.update(cx, |session, cx| {
            if session.pointer_moved(local.x.as_f32(), local.y.as_f32()) {
                cx.notify();
            }
        });
    }

    fn handle_hover(&mut self, hovered: &bool, _window: &mut Window, cx: &mut Context<Self>) {
        if *hovered {
            return;
        }
        self.session.update(cx, |session, cx| {
            if session.pointer_left() {
                cx.notify();
            }
        });
    }

    fn render_tooltip(&self, cx: &App) -> Option<AnyElement> {
        let session = self.session.read(cx);
        let shown = session.tooltip().shown()?;
        let theme = &self.theme;
        let (x, y) = shown.anchor;
        let tip_size = theme.tooltip_size;

        Some(
            div()
                .absolute()
                .left(px(x) - tip_size.width / 2.0)
                .top(px(y) - tip_size.height)
                .w(tip_size.width)
                .h(tip_size.height)
                .p(px(6.0))
                .rounded(px(3.0))
                .bg(theme.tooltip_background)
                .flex()
                .flex_col()
                .items_center()
                .text_size(theme.axis_label_size)
                .child(
                    div()
                        .text_color(theme.tooltip_title)
                        .child(shown.content.title.clone()),
                )
                .child(
                    div()
                        .text_color(theme.tooltip_text)
                        .child(shown.content.body.clone()),
                )
                .into_any_element(),
        )
    }
}

impl Render for BarChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();
        let footnote = self.session.read(cx).footnote();
        let tooltip = self.render_tooltip(cx);

        let container = self.container.clone();
        let container_origin = self.container_origin.clone();
        let hub = self.resize_hub.clone();
        let session = self.session.clone();
        let paint_theme = theme.clone();

        let chart = canvas(
            move |bounds, _window, cx| {
                container_origin.set(bounds.origin);
                let size =
                    ContainerSize::new(bounds.size.width.as_f32(), bounds.size.height.as_f32());
                if container.get() != size {
                    container.set(size);
                    // Delivered after this frame; the session change then re-renders the view.
                    hub.update(cx, |hub, cx| hub.notify(cx));
                }
            },
            move |bounds, (), window: &mut Window, cx| {
                let session = session.read(cx);
                let viewport = session.viewport();
                let origin = bounds.origin
                    + point(px(viewport.margins.left), px(viewport.margins.top));
                paint_bars(window, origin, session.scene(), &paint_theme);
                let axes = session.axes().cloned();
                if let Some(axes) = axes {
                    paint_axes(window, cx, origin, &axes, &viewport, &paint_theme);
                }
            },
        )
        .size_full();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.background)
            .child(
                div()
                    .id(("bar-chart", cx.entity_id()))
                    .relative()
                    .flex_1()
                    .w_full()
                    .on_mouse_move(cx.listener(Self::handle_mouse_move))
                    .on_hover(cx.listener(Self::handle_hover))
                    .child(chart)
                    .when_some(tooltip, |d, tip| d.child(tip)),
            )
            .when_some(footnote, |d, text| {
                d.child(
                    div()
                        .p(px(8.0))
                        .text_size(px(11.0))
                        .text_color(theme.footnote)
                        .child(text),
                )
            })
    }
}
