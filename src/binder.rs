use ahash::HashMap;
use itertools::Itertools as _;

use crate::ElementId;
use crate::host::{ClassTarget, DragHost};
use crate::options::{ClassNames, DraggableOptions, HandleSelector};

/// An element that has been made draggable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraggableInstance {
    pub element: ElementId,
    pub options: DraggableOptions,

    /// Resolved handle elements. May include `element` itself.
    pub handles: Vec<ElementId>,

    /// Styling hooks put on `element` and `handles`, removed again on detach.
    pub classes: ClassNames,
}

/// Operations that may be invoked on a draggable from the outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Command {
    /// Detach the element: remove its styling hooks and press triggers.
    Destroy,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Self::Destroy => "destroy",
        }
    }
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.is_empty() {
            return Err(ParseCommandError::Empty);
        }
        if name.starts_with('_') {
            return Err(ParseCommandError::Private(name.to_owned()));
        }
        match name {
            "destroy" => Ok(Self::Destroy),
            _ => Err(ParseCommandError::Unknown(name.to_owned())),
        }
    }
}

/// Why a command name could not be turned into a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,

    /// Underscore-prefixed names are never callable from the outside.
    Private(String),

    Unknown(String),
}

impl std::fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command name"),
            Self::Private(name) => write!(f, "command {name:?} is private"),
            Self::Unknown(name) => write!(f, "unknown command {name:?}"),
        }
    }
}

impl std::error::Error for ParseCommandError {}

/// What a dispatched [`Command`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Destroyed(DraggableInstance),
}

/// Registry of draggable elements and the handles that start their drags.
#[derive(Debug, Default)]
pub struct HandleBinder {
    instances: HashMap<ElementId, DraggableInstance>,

    /// handle → draggable element it belongs to
    handles: HashMap<ElementId, ElementId>,
}

impl HandleBinder {
    pub fn instance(&self, element: ElementId) -> Option<&DraggableInstance> {
        self.instances.get(&element)
    }

    pub fn is_attached(&self, element: ElementId) -> bool {
        self.instances.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Make `element` draggable.
    ///
    /// Attaching an element twice returns the existing instance unchanged.
    pub fn attach(
        &mut self,
        host: &mut dyn DragHost,
        element: ElementId,
        options: DraggableOptions,
        classes: &ClassNames,
    ) -> &DraggableInstance {
        if self.instances.contains_key(&element) {
            log::debug!("{element:?} is already draggable");
        } else {
            let instance = self.bind(host, element, options, classes);
            self.instances.insert(element, instance);
        }
        &self.instances[&element]
    }

    fn bind(
        &mut self,
        host: &mut dyn DragHost,
        element: ElementId,
        options: DraggableOptions,
        classes: &ClassNames,
    ) -> DraggableInstance {
        let candidates = resolve_handles(host, element, options.handle.as_ref());

        host.add_class(ClassTarget::Element(element), &classes.draggable);

        let mut handles = Vec::with_capacity(candidates.len());
        for handle in candidates {
            if let Some(owner) = self.handles.get(&handle) {
                log::warn!(
                    "{handle:?} is already a handle of {owner:?}; not binding it to {element:?}"
                );
                continue;
            }
            self.handles.insert(handle, element);
            host.add_class(ClassTarget::Element(handle), &classes.handle);
            handles.push(handle);
        }

        log::debug!("attached {element:?} with {} handle(s)", handles.len());

        DraggableInstance {
            element,
            options,
            handles,
            classes: classes.clone(),
        }
    }

    /// Undo [`Self::attach`]. Returns `None` if `element` was not draggable.
    pub fn detach(
        &mut self,
        host: &mut dyn DragHost,
        element: ElementId,
    ) -> Option<DraggableInstance> {
        let instance = self.instances.remove(&element)?;
        let classes = &instance.classes;

        host.remove_class(ClassTarget::Element(element), &classes.draggable);
        for &handle in &instance.handles {
            self.handles.remove(&handle);
            host.remove_class(ClassTarget::Element(handle), &classes.handle);
        }

        log::debug!("detached {element:?}");
        Some(instance)
    }

    /// Which draggable, if any, a press on `target` should start.
    ///
    /// The press is routed from `target` up through its ancestors to the first registered handle.
    pub fn owner_of_press(&self, host: &dyn DragHost, target: ElementId) -> Option<ElementId> {
        let mut cursor = Some(target);
        while let Some(id) = cursor {
            if let Some(&owner) = self.handles.get(&id) {
                return Some(owner);
            }
            cursor = host.parent(id);
        }
        None
    }

    /// Run `command` on the draggable `element`. Returns `None` if `element` is not draggable.
    pub fn dispatch(
        &mut self,
        host: &mut dyn DragHost,
        element: ElementId,
        command: Command,
    ) -> Option<CommandOutcome> {
        match command {
            Command::Destroy => self.detach(host, element).map(CommandOutcome::Destroyed),
        }
    }
}

fn resolve_handles(
    host: &dyn DragHost,
    element: ElementId,
    selector: Option<&HandleSelector>,
) -> Vec<ElementId> {
    let Some(selector) = selector else {
        return vec![element];
    };

    // Only `element` and its descendants can be handles.
    let found = match selector {
        HandleSelector::Elements(ids) => ids
            .iter()
            .copied()
            .filter(|&id| id == element || is_within(host, id, element))
            .collect(),
        HandleSelector::Tag(_) => {
            let mut found = host.find(element, selector);
            if host.matches(element, selector) {
                found.push(element);
            }
            found
        }
    };

    found.into_iter().unique().collect()
}

fn is_within(host: &dyn DragHost, element: ElementId, root: ElementId) -> bool {
    let mut cursor = host.parent(element);
    while let Some(id) = cursor {
        if id == root {
            return true;
        }
        cursor = host.parent(id);
    }
    false
}
