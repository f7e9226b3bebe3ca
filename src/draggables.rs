use std::collections::VecDeque;

use egui::{PointerButton, Pos2};

use crate::ElementId;
use crate::binder::{Command, CommandOutcome, DraggableInstance, HandleBinder};
use crate::controller::DragController;
use crate::host::DragHost;
use crate::notify::{DragEvent, DragEventKind, LifecycleNotifier, Observers, SubscriptionId};
use crate::options::{DraggableOptions, DraggablesOptions};
use crate::session::DragSession;

/// What the host should do with the press event it just forwarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressResponse {
    /// A drag was started: suppress the default action (text selection, native drag, …).
    Consumed,

    /// Not ours: let the default action happen.
    Ignored,
}

impl PressResponse {
    pub fn prevent_default(self) -> bool {
        self == Self::Consumed
    }
}

/// Makes elements of a [`DragHost`] draggable.
///
/// Construct one per independent drag surface and forward the host's raw pointer events to
/// [`Self::pointer_pressed`], [`Self::pointer_moved`] and [`Self::pointer_released`].
/// Move and release are expected for the whole surface (not just the element under the pointer)
/// while [`DragHost::set_pointer_capture`] is on.
///
/// ```
/// # use egui_draggable::{Draggables, DraggableOptions};
/// # fn demo(host: &mut dyn egui_draggable::DragHost, panel: egui::Id, title: egui::Id) {
/// let mut draggables = Draggables::default();
/// draggables.make_draggable(host, panel, DraggableOptions::default().with_handle("title"));
/// draggables.subscribe(panel, |event| {
///     println!("{} {:?}", event.kind.event_name(), event.session.position);
/// });
///
/// // From the host's event loop:
/// let press = draggables.pointer_pressed(
///     host,
///     title,
///     egui::PointerButton::Primary,
///     egui::pos2(10.0, 10.0),
/// );
/// assert!(press.prevent_default());
/// draggables.pointer_moved(host, egui::pos2(20.0, 15.0));
/// draggables.pointer_released(host, egui::pos2(20.0, 15.0));
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Draggables {
    options: DraggablesOptions,

    binder: HandleBinder,
    controller: DragController,
    sink: EventSink,
}

impl Draggables {
    pub fn new(options: DraggablesOptions) -> Self {
        Self {
            controller: DragController::new(options.classes.dragging.clone()),
            options,
            binder: HandleBinder::default(),
            sink: EventSink::default(),
        }
    }

    pub fn options(&self) -> &DraggablesOptions {
        &self.options
    }

    /// Make `element` draggable. Idempotent: an element that is already draggable keeps its
    /// existing instance and `options` are ignored.
    pub fn make_draggable(
        &mut self,
        host: &mut dyn DragHost,
        element: ElementId,
        options: DraggableOptions,
    ) -> &DraggableInstance {
        self.binder.attach(host, element, options, &self.options.classes)
    }

    /// [`Self::make_draggable`] for each element, sharing the same `options`.
    ///
    /// Returns how many elements were newly made draggable.
    pub fn make_draggable_all(
        &mut self,
        host: &mut dyn DragHost,
        elements: impl IntoIterator<Item = ElementId>,
        options: &DraggableOptions,
    ) -> usize {
        let mut attached = 0;
        for element in elements {
            if !self.binder.is_attached(element) {
                attached += 1;
            }
            self.binder.attach(host, element, options.clone(), &self.options.classes);
        }
        attached
    }

    pub fn instance(&self, element: ElementId) -> Option<&DraggableInstance> {
        self.binder.instance(element)
    }

    pub fn is_draggable(&self, element: ElementId) -> bool {
        self.binder.is_attached(element)
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Run `command` on `element`. Ignored (returns `None`) if `element` is not draggable.
    ///
    /// Destroying an element mid-drag does not end its drag: the session runs until release
    /// and the element's observers still receive `stop`.
    pub fn invoke(
        &mut self,
        host: &mut dyn DragHost,
        element: ElementId,
        command: Command,
    ) -> Option<CommandOutcome> {
        self.binder.dispatch(host, element, command)
    }

    /// Like [`Self::invoke`], for callers that only have a command name.
    ///
    /// Unknown and underscore-prefixed names are silently ignored.
    pub fn invoke_by_name(
        &mut self,
        host: &mut dyn DragHost,
        element: ElementId,
        name: &str,
    ) -> Option<CommandOutcome> {
        match name.parse::<Command>() {
            Ok(command) => self.invoke(host, element, command),
            Err(err) => {
                log::debug!("ignoring invoke on {element:?}: {err}");
                None
            }
        }
    }

    pub fn subscribe(
        &mut self,
        element: ElementId,
        observer: impl FnMut(&DragEvent<'_>) + 'static,
    ) -> SubscriptionId {
        self.sink.observers.subscribe(element, observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.sink.observers.unsubscribe(id)
    }

    /// Forward a pointer press on `target` (the innermost element under the pointer).
    pub fn pointer_pressed(
        &mut self,
        host: &mut dyn DragHost,
        target: ElementId,
        button: PointerButton,
        pos: Pos2,
    ) -> PressResponse {
        if button != PointerButton::Primary {
            log::trace!("ignoring {button:?} press on {target:?}");
            return PressResponse::Ignored;
        }
        let Some(element) = self.binder.owner_of_press(host, target) else {
            return PressResponse::Ignored;
        };

        self.debug_log_event(format!("press element={element:?} at {pos:?}"));
        let mut notifier = TappedNotifier::new(&mut self.sink, &self.options);
        self.controller.begin_drag(host, &mut notifier, element, pos);
        PressResponse::Consumed
    }

    pub fn pointer_moved(&mut self, host: &mut dyn DragHost, pos: Pos2) {
        let mut notifier = TappedNotifier::new(&mut self.sink, &self.options);
        self.controller.on_pointer_move(host, &mut notifier, pos);
    }

    /// Returns the finished session, or `None` if no drag was active.
    pub fn pointer_released(&mut self, host: &mut dyn DragHost, pos: Pos2) -> Option<DragSession> {
        let mut notifier = TappedNotifier::new(&mut self.sink, &self.options);
        self.controller.on_pointer_release(host, &mut notifier, pos)
    }

    pub fn debug_log_text(&self) -> String {
        self.sink
            .debug_log
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.sink.debug_log.clear();
    }

    fn debug_log_event(&mut self, message: String) {
        if self.options.debug_event_log {
            self.sink
                .push_debug_line(self.options.debug_event_log_capacity, message);
        }
    }
}

#[derive(Debug, Default)]
struct EventSink {
    observers: Observers,
    debug_log: VecDeque<String>,
    debug_event: u64,
}

impl EventSink {
    fn push_debug_line(&mut self, capacity: usize, message: String) {
        self.debug_event = self.debug_event.wrapping_add(1);
        let cap = capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[event {}] {}", self.debug_event, message));
    }
}

/// Forwards to the observers, copying each notification into the debug log when enabled.
struct TappedNotifier<'a> {
    sink: &'a mut EventSink,

    /// Debug log capacity, `None` when the debug log is off.
    debug_capacity: Option<usize>,
}

impl<'a> TappedNotifier<'a> {
    fn new(sink: &'a mut EventSink, options: &DraggablesOptions) -> Self {
        Self {
            sink,
            debug_capacity: options
                .debug_event_log
                .then_some(options.debug_event_log_capacity),
        }
    }
}

impl LifecycleNotifier for TappedNotifier<'_> {
    fn notify(&mut self, element: ElementId, kind: DragEventKind, session: &DragSession) {
        if let Some(capacity) = self.debug_capacity {
            let pos = &session.position;
            let line = format!(
                "{} element={element:?} start={:?} current={:?} stop={:?}",
                kind.event_name(),
                pos.start,
                pos.current,
                pos.stop
            );
            self.sink.push_debug_line(capacity, line);
        }
        self.sink.observers.notify(element, kind, session);
    }
}
