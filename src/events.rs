//! Change notifications for the rendering layer and other collaborators.
//!
//! The controller emits a [`CanvasEvent`] for every observable state change.
//! Listeners are registered with [`EventEmitter::subscribe`] and stay
//! registered for as long as the returned [`Subscription`] is alive.
//!
//! # Example
//!
//! ```ignore
//! let sub = ctrl.subscribe(|event| match event {
//!     CanvasEvent::ScrollBy { dx, dy } => scroll_area.scroll_by(*dx, *dy),
//!     CanvasEvent::TransformChanged(t) => surface.apply(t),
//!     _ => {}
//! });
//! // ... later: dropping `sub` detaches the listener
//! ```

use crate::geometry::Point;
use crate::ports::{PortHover, PortRef};
use crate::registry::NodeId;
use crate::viewport::SurfaceTransform;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    NodeAdded(NodeId),
    NodeRemoved(NodeId),
    /// Live workspace-space position of a dragged node
    NodeMoved { id: NodeId, position: Point },
    SelectionChanged(Option<NodeId>),
    /// The canvas surface must apply this transform before the next frame
    TransformChanged(SurfaceTransform),
    /// Relative scroll to issue to the host's scrollable container
    ScrollBy { dx: f32, dy: f32 },
    /// Pointer entered a port; center is in screen space
    PortEntered(PortHover),
    PortLeft(PortRef),
    /// Pointer pressed a port; center is in screen space
    PortPressed(PortHover),
}

type Listener = Rc<dyn Fn(&CanvasEvent)>;
type ListenerList = RefCell<Vec<(u64, Listener)>>;

/// Fan-out of [`CanvasEvent`]s to registered listeners, in registration order.
#[derive(Default)]
pub struct EventEmitter {
    listeners: Rc<ListenerList>,
    next_id: Cell<u64>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is removed when the returned guard is dropped.
    #[must_use = "dropping the subscription immediately detaches the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&CanvasEvent) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver `event` to every listener.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// drop subscriptions while being notified.
    pub fn emit(&self, event: CanvasEvent) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Guard for a registered listener; detaches it on drop.
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
