use egui::{Pos2, Vec2};

/// One edge of a positioned element: either an explicit offset or "unset".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Inset {
    /// Not constrained (CSS `auto`).
    #[default]
    Auto,

    /// Offset in points.
    Points(f32),
}

impl Inset {
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl std::fmt::Display for Inset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Points(v) => write!(f, "{v}px"),
        }
    }
}

/// Rendered `left`/`top` of an element, captured when a drag is pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StartStyle {
    pub left: f32,
    pub top: f32,
}

impl StartStyle {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    #[must_use]
    pub fn offset(self, delta: Vec2) -> Self {
        Self {
            left: self.left + delta.x,
            top: self.top + delta.y,
        }
    }
}

/// The style applied to an element while it is dragged.
///
/// Positioning is expressed purely through `left`/`top`; `right` and `bottom` are reset to
/// [`Inset::Auto`] so stale opposing-edge constraints can't fight the new values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PositionStyle {
    pub left: f32,
    pub top: f32,
    pub right: Inset,
    pub bottom: Inset,
}

impl PositionStyle {
    pub fn left_top(&self) -> Pos2 {
        Pos2::new(self.left, self.top)
    }
}

impl From<StartStyle> for PositionStyle {
    fn from(start: StartStyle) -> Self {
        Self {
            left: start.left,
            top: start.top,
            right: Inset::Auto,
            bottom: Inset::Auto,
        }
    }
}

/// New element style for a pointer that moved from `start` to `current`.
///
/// No clamping and no rounding: the element may leave the viewport and values may be fractional.
pub fn recalc(start_style: StartStyle, start: Pos2, current: Pos2) -> PositionStyle {
    PositionStyle {
        left: start_style.left - (start.x - current.x),
        top: start_style.top - (start.y - current.y),
        right: Inset::Auto,
        bottom: Inset::Auto,
    }
}
