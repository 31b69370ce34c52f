//! Control type definitions: PointerInput, GestureMode, ControlState, ControlEvent.

use gardenkit_core::{BedGroupId, Point, Rect};

/// Identifier the input source assigns to each active pointer.
pub type PointerId = i32;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer event in client (screen pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub phase: PointerPhase,
    pub pointer_id: PointerId,
    pub client: Point,
}

impl PointerInput {
    pub fn new(phase: PointerPhase, pointer_id: PointerId, x: f64, y: f64) -> Self {
        Self {
            phase,
            pointer_id,
            client: Point::new(x, y),
        }
    }

    pub fn down(pointer_id: PointerId, x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Down, pointer_id, x, y)
    }

    pub fn moved(pointer_id: PointerId, x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Move, pointer_id, x, y)
    }

    pub fn up(pointer_id: PointerId, x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Up, pointer_id, x, y)
    }
}

/// What a drag starting at the current pointer position does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    Movement,
    Rotation,
}

impl GestureMode {
    /// CSS class used to style the control for this mode.
    pub fn css_class(&self) -> &'static str {
        match self {
            GestureMode::Movement => "mode-movement",
            GestureMode::Rotation => "mode-rotation",
        }
    }
}

/// Observable state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Hovering(GestureMode),
    Dragging(GestureMode),
}

/// Notifications emitted when a gesture ends.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// A movement gesture committed a new absolute position.
    Moved { id: BedGroupId, x: f64, y: f64 },
    /// A rotation gesture committed a new absolute rotation in `[0, 360)`.
    Rotated { id: BedGroupId, rotation: f64 },
    /// The control was pressed and released in place.
    Clicked { id: BedGroupId },
}

/// Ephemeral state of one running gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    pub pointer_id: PointerId,
    pub start: Point,
    pub start_client: Point,
    pub kind: DragKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragKind {
    Movement { constraint: Rect, offset: Point },
    Rotation { delta: f64 },
}

impl DragSession {
    pub fn mode(&self) -> GestureMode {
        match self.kind {
            DragKind::Movement { .. } => GestureMode::Movement,
            DragKind::Rotation { .. } => GestureMode::Rotation,
        }
    }
}
