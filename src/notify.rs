use ahash::HashMap;

use crate::ElementId;
use crate::session::DragSession;

/// Lifecycle notifications emitted for one drag, in this order:
/// `Start` once on the first move, `Move` once per move, `Stop` once on release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DragEventKind {
    Start,
    Move,
    Stop,
}

impl DragEventKind {
    /// The event name used on the wire, e.g. `draggablestart`.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Start => "draggablestart",
            Self::Move => "draggablemove",
            Self::Stop => "draggablestop",
        }
    }
}

/// A notification as seen by an observer.
#[derive(Clone, Copy, Debug)]
pub struct DragEvent<'a> {
    pub kind: DragEventKind,
    pub session: &'a DragSession,
}

/// Where [`crate::DragController`] sends lifecycle notifications.
pub trait LifecycleNotifier {
    fn notify(&mut self, element: ElementId, kind: DragEventKind, session: &DragSession);
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&DragEvent<'_>)>;

struct Subscription {
    id: SubscriptionId,
    observer: Observer,
}

/// Per-element observer registry.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    by_element: HashMap<ElementId, Vec<Subscription>>,
    owners: HashMap<SubscriptionId, ElementId>,
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("elements", &self.by_element.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    /// Observe `start`/`move`/`stop` on `element`. Observers run in subscription order.
    pub fn subscribe(
        &mut self,
        element: ElementId,
        observer: impl FnMut(&DragEvent<'_>) + 'static,
    ) -> SubscriptionId {
        self.next_id = self.next_id.saturating_add(1);
        let id = SubscriptionId(self.next_id);
        self.owners.insert(id, element);
        self.by_element
            .entry(element)
            .or_default()
            .push(Subscription {
                id,
                observer: Box::new(observer),
            });
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(element) = self.owners.remove(&id) else {
            return false;
        };
        if let Some(subs) = self.by_element.get_mut(&element) {
            subs.retain(|s| s.id != id);
            if subs.is_empty() {
                self.by_element.remove(&element);
            }
        }
        true
    }

    pub fn unsubscribe_element(&mut self, element: ElementId) {
        if let Some(subs) = self.by_element.remove(&element) {
            for sub in subs {
                self.owners.remove(&sub.id);
            }
        }
    }

    pub fn observer_count(&self, element: ElementId) -> usize {
        self.by_element.get(&element).map_or(0, Vec::len)
    }
}

impl LifecycleNotifier for Observers {
    fn notify(&mut self, element: ElementId, kind: DragEventKind, session: &DragSession) {
        let Some(subs) = self.by_element.get_mut(&element) else {
            return;
        };
        let event = DragEvent { kind, session };
        for sub in subs {
            (sub.observer)(&event);
        }
    }
}
