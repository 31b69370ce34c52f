//! Interactive control for one bed group.
//!
//! A control is a small state machine driven by pointer events:
//!
//! ```text
//! Idle ──hover──▶ Hovering(mode) ──down──▶ Dragging(mode) ──up / capture lost──▶ Idle
//! ```
//!
//! While no gesture runs, pointer moves classify the pointer position: the
//! outer band of the shape (10% left/right, 20% top/bottom) rotates, the
//! interior moves. The classified mode is fixed when the pointer goes down
//! and stays for the whole gesture.
//!
//! Movement is clamped so the un-rotated outline stays inside the canvas view
//! box. Rotation follows the angle the pointer sweeps around the outline
//! center. Both are only committed when the gesture ends.

mod shape;
mod types;

pub use shape::BedGroupShape;
pub use types::{ControlEvent, ControlState, GestureMode, PointerId, PointerInput, PointerPhase};

use gardenkit_core::constants::CLICK_TOLERANCE_PX;
use gardenkit_core::{
    constrain_to_box, get_offset_bbox, normalize_rotation, transform_rect, AffineMatrix,
    BedGroupGuiPosition, BedGroupId, Point, Rect,
};
use tracing::debug;

use crate::coordinates::{
    bounding_box_in_local_space, canvas_view_box, pointer_to_canvas, pointer_to_local,
    CanvasSurface,
};
use crate::svg_renderer::fmt_number;
use types::{DragKind, DragSession};

/// Fraction of the width on the left and right that acts as rotation handle.
const ROTATION_BAND_X: f64 = 0.1;
/// Fraction of the height on the top and bottom that acts as rotation handle.
const ROTATION_BAND_Y: f64 = 0.2;

/// Classifies a point in the shape's own frame into the gesture it would start.
pub fn classify_hit_zone(local: Point, shape: &BedGroupShape) -> GestureMode {
    let xp = local.x / shape.total_width();
    let yp = local.y / shape.total_height();
    if xp < ROTATION_BAND_X
        || xp > 1.0 - ROTATION_BAND_X
        || yp < ROTATION_BAND_Y
        || yp > 1.0 - ROTATION_BAND_Y
    {
        GestureMode::Rotation
    } else {
        GestureMode::Movement
    }
}

/// Direct-manipulation control for one bed group on the overlay canvas.
#[derive(Debug, Clone)]
pub struct BedGroupControl {
    id: BedGroupId,
    shape: BedGroupShape,
    position: Point,
    rotation: f64,
    selected: bool,
    hover_mode: Option<GestureMode>,
    session: Option<DragSession>,
}

impl BedGroupControl {
    pub fn new(id: impl Into<BedGroupId>, shape: BedGroupShape, gui: BedGroupGuiPosition) -> Self {
        Self {
            id: id.into(),
            shape,
            position: Point::new(gui.x, gui.y),
            rotation: normalize_rotation(gui.rotation),
            selected: false,
            hover_mode: None,
            session: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape(&self) -> &BedGroupShape {
        &self.shape
    }

    /// Committed position of the outline's top-left corner in canvas space.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Committed rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn gui_position(&self) -> BedGroupGuiPosition {
        BedGroupGuiPosition::new(self.position.x, self.position.y, self.rotation)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Replaces shape and committed placement, e.g. after the stored bed group changed.
    /// Ignored while a gesture runs so that the gesture's commit wins.
    pub fn update(&mut self, shape: BedGroupShape, gui: BedGroupGuiPosition) {
        if self.session.is_some() {
            return;
        }
        self.shape = shape;
        self.position = Point::new(gui.x, gui.y);
        self.rotation = normalize_rotation(gui.rotation);
    }

    pub fn state(&self) -> ControlState {
        match (&self.session, self.hover_mode) {
            (Some(session), _) => ControlState::Dragging(session.mode()),
            (None, Some(mode)) => ControlState::Hovering(mode),
            (None, None) => ControlState::Idle,
        }
    }

    /// Mode shown to the user: the running gesture's mode, else the hovered zone.
    pub fn gesture_mode(&self) -> Option<GestureMode> {
        match self.state() {
            ControlState::Dragging(mode) | ControlState::Hovering(mode) => Some(mode),
            ControlState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Translation of the running movement gesture, zero otherwise.
    pub fn live_offset(&self) -> Point {
        match self.session.map(|s| s.kind) {
            Some(DragKind::Movement { offset, .. }) => offset,
            _ => Point::ZERO,
        }
    }

    /// Angle swept by the running rotation gesture, zero otherwise.
    pub fn live_rotation_delta(&self) -> f64 {
        match self.session.map(|s| s.kind) {
            Some(DragKind::Rotation { delta }) => delta,
            _ => 0.0,
        }
    }

    /// Rotation currently displayed, including a running rotation gesture.
    pub fn display_rotation(&self) -> f64 {
        normalize_rotation(self.rotation + self.live_rotation_delta())
    }

    /// Center of the outline in canvas space.
    pub fn center(&self) -> Point {
        self.position + self.shape.center()
    }

    /// Transform from the shape's own frame to canvas space.
    ///
    /// Composed as live offset, then committed position, then rotation about
    /// the outline center. The live offset acts in canvas space while the
    /// rotation acts in the shape's own frame.
    pub fn render_transform(&self) -> AffineMatrix {
        let live = self.live_offset();
        let pivot = self.shape.center();
        AffineMatrix::translation(live.x, live.y)
            .then(&AffineMatrix::translation(self.position.x, self.position.y))
            .then(&AffineMatrix::rotation_about(
                self.display_rotation(),
                pivot.x,
                pivot.y,
            ))
    }

    /// SVG `transform` attribute of the group element.
    pub fn transform_attribute(&self) -> String {
        let live = self.live_offset();
        let pivot = self.shape.center();
        format!(
            "translate({}, {}) translate({}, {}) rotate({} {} {})",
            fmt_number(live.x),
            fmt_number(live.y),
            fmt_number(self.position.x),
            fmt_number(self.position.y),
            fmt_number(self.display_rotation()),
            fmt_number(pivot.x),
            fmt_number(pivot.y),
        )
    }

    /// CSS classes of the group element.
    pub fn css_classes(&self) -> String {
        let mut classes = vec!["bed-group-ctrl"];
        if self.selected {
            classes.push("active");
        }
        if let Some(mode) = self.gesture_mode() {
            classes.push(mode.css_class());
        }
        classes.join(" ")
    }

    /// Transform from the shape's own frame to client pixels.
    pub fn element_screen_transform(&self, surface: &dyn CanvasSurface) -> Option<AffineMatrix> {
        Some(surface.screen_transform()?.then(&self.render_transform()))
    }

    /// Maps a client point into the shape's own frame.
    pub fn client_to_local(&self, client: Point, surface: &dyn CanvasSurface) -> Option<Point> {
        pointer_to_local(client, &self.element_screen_transform(surface)?)
    }

    /// Returns `true` if the client point lies on the (possibly rotated) outline.
    pub fn hit_test(&self, client: Point, surface: &dyn CanvasSurface) -> bool {
        self.shape.is_renderable()
            && self
                .client_to_local(client, surface)
                .is_some_and(|local| self.shape.outline().contains(&local))
    }

    /// Client-space bounds of the un-rotated outline at its committed position.
    fn client_outline(&self, surface: &dyn CanvasSurface) -> Option<Rect> {
        let ctm = surface
            .screen_transform()?
            .then(&AffineMatrix::translation(self.position.x, self.position.y));
        Some(transform_rect(&self.shape.outline(), &ctm))
    }

    /// Re-classifies the hovered zone. No effect while a gesture runs.
    pub fn on_hover(&mut self, input: &PointerInput, surface: &dyn CanvasSurface) {
        if self.session.is_some() || !self.shape.is_renderable() {
            return;
        }
        if let Some(local) = self.client_to_local(input.client, surface) {
            self.hover_mode = Some(classify_hit_zone(local, &self.shape));
        }
    }

    /// Clears the hover indication when the pointer left the control.
    pub fn on_pointer_leave(&mut self) {
        if self.session.is_none() {
            self.hover_mode = None;
        }
    }

    /// Starts a gesture. Returns `false` if nothing was started, either because
    /// another gesture runs or because the surface is not laid out yet.
    pub fn on_pointer_down(&mut self, input: &PointerInput, surface: &mut dyn CanvasSurface) -> bool {
        if self.session.is_some() || !self.shape.is_renderable() {
            return false;
        }
        let layout: &dyn CanvasSurface = &*surface;
        let Some(start) = pointer_to_canvas(input.client, layout) else {
            debug!("Bed group {}: surface not laid out, ignoring pointer down", self.id);
            return false;
        };

        let mode = self.hover_mode.unwrap_or(GestureMode::Movement);
        let kind = match mode {
            GestureMode::Movement => {
                let constraint = self
                    .client_outline(layout)
                    .and_then(|client| bounding_box_in_local_space(&client, layout))
                    .zip(canvas_view_box(layout))
                    .map(|(bounds, view_box)| get_offset_bbox(&bounds, &view_box));
                let Some(constraint) = constraint else {
                    debug!("Bed group {}: no layout bounds, ignoring pointer down", self.id);
                    return false;
                };
                DragKind::Movement {
                    constraint,
                    offset: Point::ZERO,
                }
            }
            GestureMode::Rotation => DragKind::Rotation { delta: 0.0 },
        };

        surface.set_pointer_capture(&self.id, input.pointer_id);
        self.session = Some(DragSession {
            pointer_id: input.pointer_id,
            start,
            start_client: input.client,
            kind,
        });
        debug!("Bed group {}: {:?} gesture started at {:?}", self.id, mode, start);
        true
    }

    /// Updates the running gesture, or re-classifies the hover zone when idle.
    pub fn on_pointer_move(&mut self, input: &PointerInput, surface: &dyn CanvasSurface) {
        if self.session.is_none() {
            self.on_hover(input, surface);
            return;
        }
        let Some(current) = pointer_to_canvas(input.client, surface) else {
            return;
        };
        let center = self.center();
        let Some(session) = self
            .session
            .as_mut()
            .filter(|s| s.pointer_id == input.pointer_id)
        else {
            return;
        };

        match &mut session.kind {
            DragKind::Movement { constraint, offset } => {
                *offset = constrain_to_box(current - session.start, constraint);
            }
            DragKind::Rotation { delta } => {
                *delta = current.angle_from(&center) - session.start.angle_from(&center);
            }
        }
    }

    /// Ends the gesture, commits it and reports what changed.
    pub fn on_pointer_up(
        &mut self,
        input: &PointerInput,
        surface: &mut dyn CanvasSurface,
    ) -> Vec<ControlEvent> {
        match self.session {
            Some(session) if session.pointer_id == input.pointer_id => {}
            _ => return Vec::new(),
        }
        // The release position counts as the last move of the gesture.
        self.on_pointer_move(input, surface);
        surface.release_pointer_capture(&self.id, input.pointer_id);

        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        let mut events = vec![self.commit(&session)];
        if session.start_client.distance_to(&input.client) <= CLICK_TOLERANCE_PX {
            events.push(ControlEvent::Clicked {
                id: self.id.clone(),
            });
        }
        events
    }

    /// Ends the gesture after the surface revoked the pointer capture.
    /// Commits like a release but never counts as a click.
    pub fn on_lost_pointer_capture(&mut self, pointer_id: PointerId) -> Option<ControlEvent> {
        if self.session.is_some_and(|s| s.pointer_id == pointer_id) {
            let session = self.session.take()?;
            debug!("Bed group {}: pointer capture lost", self.id);
            Some(self.commit(&session))
        } else {
            None
        }
    }

    fn commit(&mut self, session: &DragSession) -> ControlEvent {
        match session.kind {
            DragKind::Movement { offset, .. } => {
                self.position = self.position + offset;
                debug!("Bed group {} moved to {:?}", self.id, self.position);
                ControlEvent::Moved {
                    id: self.id.clone(),
                    x: self.position.x,
                    y: self.position.y,
                }
            }
            DragKind::Rotation { delta } => {
                self.rotation = normalize_rotation(self.rotation + delta);
                debug!("Bed group {} rotated to {}", self.id, self.rotation);
                ControlEvent::Rotated {
                    id: self.id.clone(),
                    rotation: self.rotation,
                }
            }
        }
    }
}
