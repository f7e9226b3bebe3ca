use egui::Pos2;

use crate::ElementId;
use crate::host::{ClassTarget, DragHost};
use crate::notify::{DragEventKind, LifecycleNotifier};
use crate::options::ClassNames;
use crate::session::DragSession;
use crate::style::recalc;

/// Drives the idle → dragging → idle state machine for one drag surface.
///
/// At most one [`DragSession`] is active at a time. A press while a session is still open
/// (e.g. the release happened outside the window and was never delivered) first closes the
/// stale session as if it had been released at the new press position.
///
/// `start` is emitted lazily on the first move, so a press followed by a release without any
/// movement emits neither `start` nor `stop`.
#[derive(Debug)]
pub struct DragController {
    session: Option<DragSession>,
    listening: bool,
    dragging_class: String,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(ClassNames::default().dragging)
    }
}

impl DragController {
    /// `dragging_class` is put on [`ClassTarget::Document`] while a drag is active.
    pub fn new(dragging_class: impl Into<String>) -> Self {
        Self {
            session: None,
            listening: false,
            dragging_class: dragging_class.into(),
        }
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Are the global move/release listeners registered?
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Open a session for `element`, pressed at `coords`.
    pub fn begin_drag(
        &mut self,
        host: &mut dyn DragHost,
        notifier: &mut dyn LifecycleNotifier,
        element: ElementId,
        coords: Pos2,
    ) {
        if let Some(stale) = &self.session {
            log::debug!(
                "recovering unreleased drag of {:?} on new press at {coords:?}",
                stale.element
            );
            self.on_pointer_release(host, notifier, coords);
        }

        let start_style = host.position(element);
        log::debug!("drag open element={element:?} start={coords:?} style={start_style:?}");
        self.session = Some(DragSession::new(element, start_style, coords));

        host.add_class(ClassTarget::Document, &self.dragging_class);
        host.set_pointer_capture(true);
        self.listening = true;
    }

    /// Track a pointer move. Does nothing when idle.
    pub fn on_pointer_move(
        &mut self,
        host: &mut dyn DragHost,
        notifier: &mut dyn LifecycleNotifier,
        coords: Pos2,
    ) {
        let Some(session) = &mut self.session else {
            return;
        };

        if !session.has_moved() {
            notifier.notify(session.element, DragEventKind::Start, session);
        }

        session.position.current = Some(coords);
        let style = recalc(session.start_style, session.position.start, coords);
        log::trace!("drag move element={:?} to {coords:?}", session.element);
        host.apply_style(session.element, &style);

        notifier.notify(session.element, DragEventKind::Move, session);
    }

    /// Close the active session, returning it. Does nothing (and returns `None`) when idle.
    pub fn on_pointer_release(
        &mut self,
        host: &mut dyn DragHost,
        notifier: &mut dyn LifecycleNotifier,
        coords: Pos2,
    ) -> Option<DragSession> {
        let mut session = self.session.take()?;
        session.position.stop = Some(coords);

        if session.has_moved() {
            notifier.notify(session.element, DragEventKind::Stop, &session);
        }
        log::debug!(
            "drag close element={:?} stop={coords:?} moved={}",
            session.element,
            session.has_moved()
        );

        if self.listening {
            host.set_pointer_capture(false);
            self.listening = false;
        }
        host.remove_class(ClassTarget::Document, &self.dragging_class);

        Some(session)
    }
}
