use crate::ElementId;
use crate::options::HandleSelector;
use crate::style::{PositionStyle, StartStyle};

/// Where a styling class is put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassTarget {
    Element(ElementId),

    /// The global, document-level container.
    Document,
}

/// The environment a draggable lives in: an element tree that can be queried and restyled.
///
/// The host owns the elements; this crate only ever holds their ids. Implement this for your
/// retained UI (or a test fixture) and forward raw pointer events into [`crate::Draggables`].
pub trait DragHost {
    /// Parent of `element`, used to route a press on a descendant up to its handle.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Descendants of `root` (not `root` itself) matching `selector`.
    fn find(&self, root: ElementId, selector: &HandleSelector) -> Vec<ElementId>;

    /// Does `element` itself match `selector`?
    fn matches(&self, element: ElementId, selector: &HandleSelector) -> bool;

    /// Rendered `left`/`top` of `element`, relative to its offset parent.
    fn position(&self, element: ElementId) -> StartStyle;

    fn apply_style(&mut self, element: ElementId, style: &PositionStyle);

    fn add_class(&mut self, target: ClassTarget, class: &str);

    fn remove_class(&mut self, target: ClassTarget, class: &str);

    /// Start (`true`) or stop (`false`) delivering pointer move/release events globally,
    /// regardless of which element is under the pointer.
    ///
    /// Only called while a drag is active, so an idle host does no per-move work.
    fn set_pointer_capture(&mut self, capture: bool);
}
