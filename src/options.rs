use crate::ElementId;

/// Which part of a draggable element accepts the press that starts a drag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum HandleSelector {
    /// A selector string, interpreted by the host (e.g. a tag or class name).
    Tag(String),

    /// Explicit handle elements.
    Elements(Vec<ElementId>),
}

impl From<&str> for HandleSelector {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_owned())
    }
}

impl From<String> for HandleSelector {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<Vec<ElementId>> for HandleSelector {
    fn from(elements: Vec<ElementId>) -> Self {
        Self::Elements(elements)
    }
}

/// Per-element options for [`crate::Draggables::make_draggable`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DraggableOptions {
    /// Handle(s) that start a drag. `None` means the whole element.
    pub handle: Option<HandleSelector>,
}

impl DraggableOptions {
    #[must_use]
    pub fn with_handle(mut self, handle: impl Into<HandleSelector>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}

/// Class names used as styling hooks. They carry no behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ClassNames {
    /// Put on every draggable element.
    pub draggable: String,

    /// Put on every handle element.
    pub handle: String,

    /// Put on the document while a drag is active.
    pub dragging: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            draggable: "draggable".to_owned(),
            handle: "draggable-handle".to_owned(),
            dragging: "draggable-dragging".to_owned(),
        }
    }
}

/// Options for [`crate::Draggables`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DraggablesOptions {
    pub classes: ClassNames,

    /// If true, record lifecycle transitions in a small ring buffer,
    /// readable with [`crate::Draggables::debug_log_text`].
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for DraggablesOptions {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_defaults_to_element() {
        assert_eq!(DraggableOptions::default().handle, None);
    }

    #[test]
    fn with_handle_accepts_tags_and_elements() {
        let opt = DraggableOptions::default().with_handle(".title");
        assert_eq!(opt.handle, Some(HandleSelector::Tag(".title".to_owned())));

        let grip = egui::Id::new("grip");
        let opt = DraggableOptions::default().with_handle(vec![grip]);
        assert_eq!(opt.handle, Some(HandleSelector::Elements(vec![grip])));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_fill_missing_fields_from_default() {
        let opt: DraggablesOptions =
            serde_json::from_str(r#"{ "debug_event_log": true }"#).expect("deserialize");
        assert!(opt.debug_event_log);
        assert_eq!(opt.debug_event_log_capacity, 200);
        assert_eq!(opt.classes, ClassNames::default());
    }
}
