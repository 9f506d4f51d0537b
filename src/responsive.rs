//! Resize notifications and the controller that redraws a session on each one.
//!
//! Notifications carry no payload: subscribers re-read the container box themselves. A
//! controller stays subscribed exactly as long as it holds its gpui [`Subscription`].

use std::cell::Cell;
use std::rc::Rc;

use gpui::{App, Context, Entity, EventEmitter, Subscription};

use crate::data_types::ContainerSize;
use crate::session::ChartSession;

/// Emitted when the chart container was measured at a new size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerResized;

/// Source of container resize notifications.
#[derive(Default)]
pub struct ResizeHub;

impl EventEmitter<ContainerResized> for ResizeHub {}

impl ResizeHub {
    pub fn notify(&mut self, cx: &mut Context<Self>) {
        cx.emit(ContainerResized);
    }
}

/// Where the current container bounding box is read from.
pub trait ContainerBox {
    fn bounding_box(&self) -> ContainerSize;
}

impl ContainerBox for Cell<ContainerSize> {
    fn bounding_box(&self) -> ContainerSize {
        self.get()
    }
}

/// Redraws a session whenever the hub fires. Dropping the controller unsubscribes.
pub struct ResponsiveController {
    _subscription: Subscription,
}

impl ResponsiveController {
    pub fn attach(
        hub: &Entity<ResizeHub>,
        session: Entity<ChartSession>,
        container: Rc<dyn ContainerBox>,
        cx: &mut App,
    ) -> Self {
        let subscription = cx.subscribe(hub, move |_, _: &ContainerResized, cx| {
            let size = container.bounding_box();
            session.update(cx, |session, cx| {
                session.resize(size);
                cx.notify();
            });
        });
        Self {
            _subscription: subscription,
        }
    }
}
