//! Make elements of a retained UI draggable by a handle.
//!
//! Press on a handle, move the pointer, and the element's `left`/`top` follow the pointer delta
//! until release. Observers get `start` (on the first move), `move` and `stop` notifications
//! carrying the whole [`DragSession`].
//!
//! The crate does no rendering. You provide a [`DragHost`] for your element tree and forward raw
//! pointer events into a [`Draggables`].
#![forbid(unsafe_code)]

pub mod binder;
pub mod controller;
pub mod draggables;
pub mod host;
pub mod notify;
pub mod options;
pub mod session;
pub mod style;

#[cfg(test)]
mod test_host;

/// Identity of an element owned by the [`DragHost`].
pub type ElementId = egui::Id;

pub use binder::{Command, CommandOutcome, DraggableInstance, HandleBinder, ParseCommandError};
pub use controller::DragController;
pub use draggables::{Draggables, PressResponse};
pub use host::{ClassTarget, DragHost};
pub use notify::{DragEvent, DragEventKind, LifecycleNotifier, Observers, SubscriptionId};
pub use options::{ClassNames, DraggableOptions, DraggablesOptions, HandleSelector};
pub use session::{DragSession, PointerTrack};
pub use style::{Inset, PositionStyle, StartStyle, recalc};
