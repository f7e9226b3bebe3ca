//! Replays a short pointer script against a tiny in-memory element tree and prints what happens.
//!
//! Run with `RUST_LOG=debug cargo run --example scripted_drag` to also see the library's logs.

use std::collections::BTreeMap;

use egui::{Id, PointerButton, pos2};
use egui_draggable::{
    ClassTarget, DragHost, DraggableOptions, Draggables, DraggablesOptions, HandleSelector,
    PositionStyle, StartStyle,
};

#[derive(Default)]
struct Node {
    parent: Option<Id>,
    tag: &'static str,
    position: StartStyle,
    classes: Vec<String>,
}

#[derive(Default)]
struct Scene {
    nodes: BTreeMap<u64, (Id, Node)>,
    document_classes: Vec<String>,
}

impl Scene {
    fn add(
        &mut self,
        name: &str,
        parent: Option<Id>,
        tag: &'static str,
        position: StartStyle,
    ) -> Id {
        let id = Id::new(name);
        self.nodes.insert(
            id.value(),
            (
                id,
                Node {
                    parent,
                    tag,
                    position,
                    classes: Vec::new(),
                },
            ),
        );
        id
    }

    fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id.value()).map(|(_, n)| n)
    }

    fn node_mut(&mut self, id: Id) -> Option<&mut Node> {
        self.nodes.get_mut(&id.value()).map(|(_, n)| n)
    }

    fn is_within(&self, mut id: Id, root: Id) -> bool {
        while let Some(parent) = self.parent(id) {
            if parent == root {
                return true;
            }
            id = parent;
        }
        false
    }
}

impl DragHost for Scene {
    fn parent(&self, element: Id) -> Option<Id> {
        self.node(element)?.parent
    }

    fn find(&self, root: Id, selector: &HandleSelector) -> Vec<Id> {
        self.nodes
            .values()
            .map(|(id, _)| *id)
            .filter(|&id| self.is_within(id, root) && self.matches(id, selector))
            .collect()
    }

    fn matches(&self, element: Id, selector: &HandleSelector) -> bool {
        match selector {
            HandleSelector::Tag(tag) => self.node(element).is_some_and(|n| n.tag == tag.as_str()),
            HandleSelector::Elements(ids) => ids.contains(&element),
        }
    }

    fn position(&self, element: Id) -> StartStyle {
        self.node(element).map(|n| n.position).unwrap_or_default()
    }

    fn apply_style(&mut self, element: Id, style: &PositionStyle) {
        if let Some(node) = self.node_mut(element) {
            node.position = StartStyle::new(style.left, style.top);
        }
        println!(
            "  style {element:?}: left={} top={} right={} bottom={}",
            style.left, style.top, style.right, style.bottom
        );
    }

    fn add_class(&mut self, target: ClassTarget, class: &str) {
        match target {
            ClassTarget::Document => self.document_classes.push(class.to_owned()),
            ClassTarget::Element(id) => {
                if let Some(node) = self.node_mut(id) {
                    node.classes.push(class.to_owned());
                }
            }
        }
    }

    fn remove_class(&mut self, target: ClassTarget, class: &str) {
        match target {
            ClassTarget::Document => self.document_classes.retain(|c| c != class),
            ClassTarget::Element(id) => {
                if let Some(node) = self.node_mut(id) {
                    node.classes.retain(|c| c != class);
                }
            }
        }
    }

    fn set_pointer_capture(&mut self, capture: bool) {
        println!("  pointer capture: {capture}");
    }
}

fn main() {
    env_logger::init();

    let mut scene = Scene::default();
    let window = scene.add("window", None, "window", StartStyle::new(100.0, 50.0));
    let title = scene.add("title", Some(window), "title", StartStyle::default());
    let body = scene.add("body", Some(window), "body", StartStyle::default());

    let mut draggables = Draggables::new(DraggablesOptions {
        debug_event_log: true,
        ..Default::default()
    });
    draggables.make_draggable(
        &mut scene,
        window,
        DraggableOptions::default().with_handle("title"),
    );
    draggables.subscribe(window, |event| {
        let pos = &event.session.position;
        println!(
            "  {} start={:?} current={:?} stop={:?}",
            event.kind.event_name(),
            pos.start,
            pos.current,
            pos.stop
        );
    });

    println!("right-click on the title:");
    let press = draggables.pointer_pressed(
        &mut scene,
        title,
        PointerButton::Secondary,
        pos2(200.0, 60.0),
    );
    println!("  {press:?}");

    println!("press on the body:");
    let press =
        draggables.pointer_pressed(&mut scene, body, PointerButton::Primary, pos2(200.0, 120.0));
    println!("  {press:?}");

    println!("drag by the title:");
    let press =
        draggables.pointer_pressed(&mut scene, title, PointerButton::Primary, pos2(200.0, 60.0));
    println!("  {press:?}");
    for pos in [pos2(205.0, 62.0), pos2(240.0, 90.0), pos2(260.0, 80.0)] {
        draggables.pointer_moved(&mut scene, pos);
    }
    draggables.pointer_released(&mut scene, pos2(260.0, 80.0));

    println!("final position: {:?}", scene.position(window));
    println!("debug log:\n{}", draggables.debug_log_text());

    draggables.invoke_by_name(&mut scene, window, "destroy");
    println!("still draggable after destroy: {}", draggables.is_draggable(window));
}
