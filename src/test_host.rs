//! In-memory [`DragHost`] and notifier used by the unit tests.

use crate::ElementId;
use crate::host::{ClassTarget, DragHost};
use crate::notify::{DragEventKind, LifecycleNotifier};
use crate::options::HandleSelector;
use crate::session::DragSession;
use crate::style::{PositionStyle, StartStyle};

#[derive(Debug)]
struct Node {
    id: ElementId,
    parent: Option<ElementId>,
    tags: Vec<String>,
    position: StartStyle,
    style: Option<PositionStyle>,
    classes: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct TestHost {
    nodes: Vec<Node>,
    document_classes: Vec<String>,
    pub(crate) captured: bool,
    pub(crate) capture_calls: usize,
}

impl TestHost {
    pub(crate) fn add_root(&mut self, name: &str, position: StartStyle) -> ElementId {
        self.insert(name, None, position, &[])
    }

    pub(crate) fn add_child(&mut self, parent: ElementId, name: &str, tags: &[&str]) -> ElementId {
        self.insert(name, Some(parent), StartStyle::default(), tags)
    }

    pub(crate) fn tag(&mut self, element: ElementId, tag: &str) {
        if let Some(node) = self.node_mut(element) {
            node.tags.push(tag.to_owned());
        }
    }

    pub(crate) fn style_of(&self, element: ElementId) -> Option<PositionStyle> {
        self.node(element)?.style
    }

    pub(crate) fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub(crate) fn document_has_class(&self, class: &str) -> bool {
        self.document_classes.iter().any(|c| c == class)
    }

    fn insert(
        &mut self,
        name: &str,
        parent: Option<ElementId>,
        position: StartStyle,
        tags: &[&str],
    ) -> ElementId {
        let id = egui::Id::new(("test_host", name));
        self.nodes.push(Node {
            id,
            parent,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            position,
            style: None,
            classes: Vec::new(),
        });
        id
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    fn is_descendant(&self, element: ElementId, root: ElementId) -> bool {
        let mut cursor = self.parent(element);
        while let Some(id) = cursor {
            if id == root {
                return true;
            }
            cursor = self.parent(id);
        }
        false
    }
}

impl DragHost for TestHost {
    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element)?.parent
    }

    fn find(&self, root: ElementId, selector: &HandleSelector) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|n| self.is_descendant(n.id, root) && self.matches(n.id, selector))
            .map(|n| n.id)
            .collect()
    }

    fn matches(&self, element: ElementId, selector: &HandleSelector) -> bool {
        match selector {
            HandleSelector::Tag(tag) => self
                .node(element)
                .is_some_and(|n| n.tags.iter().any(|t| t == tag)),
            HandleSelector::Elements(ids) => ids.contains(&element),
        }
    }

    fn position(&self, element: ElementId) -> StartStyle {
        self.node(element)
            .map(|n| n.style.map_or(n.position, |s| StartStyle::new(s.left, s.top)))
            .unwrap_or_default()
    }

    fn apply_style(&mut self, element: ElementId, style: &PositionStyle) {
        if let Some(node) = self.node_mut(element) {
            node.style = Some(*style);
        }
    }

    fn add_class(&mut self, target: ClassTarget, class: &str) {
        let classes = match target {
            ClassTarget::Document => &mut self.document_classes,
            ClassTarget::Element(id) => match self.node_mut(id) {
                Some(node) => &mut node.classes,
                None => return,
            },
        };
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, target: ClassTarget, class: &str) {
        let classes = match target {
            ClassTarget::Document => &mut self.document_classes,
            ClassTarget::Element(id) => match self.node_mut(id) {
                Some(node) => &mut node.classes,
                None => return,
            },
        };
        classes.retain(|c| c != class);
    }

    fn set_pointer_capture(&mut self, capture: bool) {
        self.captured = capture;
        self.capture_calls += 1;
    }
}

/// Records every notification with a copy of the session at that moment.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) events: Vec<(DragEventKind, DragSession)>,
}

impl RecordingNotifier {
    pub(crate) fn kinds(&self) -> Vec<DragEventKind> {
        self.events.iter().map(|(kind, _)| *kind).collect()
    }
}

impl LifecycleNotifier for RecordingNotifier {
    fn notify(&mut self, element: ElementId, kind: DragEventKind, session: &DragSession) {
        assert_eq!(element, session.element, "notified on the dragged element");
        self.events.push((kind, session.clone()));
    }
}
