use egui::{Pos2, Vec2};

use crate::ElementId;
use crate::style::{PositionStyle, StartStyle, recalc};

/// Pointer coordinates over the lifetime of one drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PointerTrack {
    /// Where the pointer was pressed.
    pub start: Pos2,

    /// Latest move, `None` until the pointer first moves.
    pub current: Option<Pos2>,

    /// Where the pointer was released, `None` while the drag is in progress.
    pub stop: Option<Pos2>,
}

impl PointerTrack {
    pub fn new(start: Pos2) -> Self {
        Self {
            start,
            current: None,
            stop: None,
        }
    }
}

/// Data describing one drag, from press to release.
///
/// Observers receive this as-is on every notification, so they can compute their own deltas or
/// read the absolute pointer and style data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DragSession {
    pub element: ElementId,
    pub start_style: StartStyle,
    pub position: PointerTrack,
}

impl DragSession {
    pub fn new(element: ElementId, start_style: StartStyle, start: Pos2) -> Self {
        Self {
            element,
            start_style,
            position: PointerTrack::new(start),
        }
    }

    /// Has the pointer moved since the press?
    pub fn has_moved(&self) -> bool {
        self.position.current.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.position.stop.is_some()
    }

    /// Pointer travel since the press, using the release position once known.
    pub fn delta(&self) -> Vec2 {
        self.position
            .stop
            .or(self.position.current)
            .map_or(Vec2::ZERO, |pos| pos - self.position.start)
    }

    /// The style for the latest pointer position, if the pointer has moved.
    pub fn style(&self) -> Option<PositionStyle> {
        self.position
            .current
            .map(|current| recalc(self.start_style, self.position.start, current))
    }
}
