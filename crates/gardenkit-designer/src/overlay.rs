//! Overlay hosting one interactive control per bed group.
//!
//! The overlay is sized to the site in meters and owns the persisted GUI
//! placement mapping. Committed gestures are folded into that mapping, which
//! is then handed back to the caller for persisting.

use gardenkit_core::{BedGroup, BedGroupGuiPosition, BedGroupId, GuiPositions, Rect};
use tracing::{debug, warn};

use crate::control::{
    BedGroupControl, BedGroupShape, ControlEvent, PointerId, PointerInput, PointerPhase,
};
use crate::coordinates::CanvasSurface;
use crate::selection_manager::SelectionManager;

/// Something the owner of the overlay has to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// A control was clicked and its bed group became the selected one.
    Selected(BedGroupId),
    /// A gesture was committed. Carries the complete, pruned mapping to persist.
    GuiPositionsChanged(GuiPositions),
}

#[derive(Debug, Clone)]
pub struct BedOverlay {
    size_in_meters: f64,
    controls: Vec<BedGroupControl>,
    gui_positions: GuiPositions,
    selection: SelectionManager,
}

impl BedOverlay {
    pub fn new(size_in_meters: f64) -> Self {
        Self {
            size_in_meters,
            controls: Vec::new(),
            gui_positions: GuiPositions::new(),
            selection: SelectionManager::new(),
        }
    }

    /// Creates an overlay and populates it from persisted state.
    pub fn with_groups(size_in_meters: f64, groups: &[BedGroup], gui: GuiPositions) -> Self {
        let mut overlay = Self::new(size_in_meters);
        overlay.sync(groups, gui);
        overlay
    }

    pub fn size_in_meters(&self) -> f64 {
        self.size_in_meters
    }

    pub fn set_size_in_meters(&mut self, size_in_meters: f64) {
        self.size_in_meters = size_in_meters;
    }

    /// Logical view box of the overlay canvas, `0 0 size size`.
    pub fn view_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size_in_meters, self.size_in_meters)
    }

    pub fn controls(&self) -> &[BedGroupControl] {
        &self.controls
    }

    pub fn control(&self, id: &str) -> Option<&BedGroupControl> {
        self.controls.iter().find(|c| c.id() == id)
    }

    pub fn gui_positions(&self) -> &GuiPositions {
        &self.gui_positions
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    /// Marks one bed group as active, or none.
    pub fn set_selected(&mut self, id: Option<&str>) {
        match id {
            Some(id) => {
                self.selection.select(id);
            }
            None => self.selection.clear(),
        }
        self.apply_selection();
    }

    /// Rebuilds the controls from the current bed groups and stored placement.
    ///
    /// Groups without stored placement start at the origin without rotation.
    /// Controls in the middle of a gesture keep their live state.
    pub fn sync(&mut self, groups: &[BedGroup], gui: GuiPositions) {
        self.gui_positions = gui;
        let mut previous = std::mem::take(&mut self.controls);
        self.controls = groups
            .iter()
            .map(|group| {
                let shape = BedGroupShape::from_bed_group(group);
                let placement = self
                    .gui_positions
                    .get(&group.id)
                    .copied()
                    .unwrap_or_default();
                match previous.iter().position(|c| c.id() == group.id) {
                    Some(index) => {
                        let mut control = previous.swap_remove(index);
                        control.update(shape, placement);
                        control
                    }
                    None => BedGroupControl::new(group.id.clone(), shape, placement),
                }
            })
            .collect();
        if self.selected_id().is_some_and(|id| self.control(id).is_none()) {
            self.selection.clear();
        }
        self.apply_selection();
    }

    /// Routes a pointer event to the control it belongs to.
    ///
    /// A captured pointer always reaches the capturing control. Otherwise the
    /// topmost control under the pointer gets it.
    pub fn handle_pointer(
        &mut self,
        input: &PointerInput,
        surface: &mut dyn CanvasSurface,
    ) -> Vec<OverlayEvent> {
        let captured = surface
            .pointer_capture_target(input.pointer_id)
            .and_then(|target| self.controls.iter().position(|c| c.id() == target));

        match input.phase {
            PointerPhase::Down => {
                let target = match captured {
                    Some(index) => Some(index),
                    None => self.topmost_hit(input, &*surface),
                };
                if let Some(index) = target {
                    self.controls[index].on_pointer_down(input, surface);
                }
                Vec::new()
            }
            PointerPhase::Move => {
                if let Some(index) = captured {
                    self.controls[index].on_pointer_move(input, surface);
                } else {
                    let hit = self.topmost_hit(input, &*surface);
                    for (index, control) in self.controls.iter_mut().enumerate() {
                        if Some(index) == hit {
                            control.on_hover(input, surface);
                        } else {
                            control.on_pointer_leave();
                        }
                    }
                }
                Vec::new()
            }
            PointerPhase::Up => match captured {
                Some(index) => {
                    let events = self.controls[index].on_pointer_up(input, surface);
                    self.apply_control_events(events)
                }
                None => Vec::new(),
            },
        }
    }

    /// Ends whichever gesture was tracking `pointer_id` after the surface
    /// took the capture away.
    pub fn handle_lost_pointer_capture(&mut self, pointer_id: PointerId) -> Vec<OverlayEvent> {
        let events: Vec<ControlEvent> = self
            .controls
            .iter_mut()
            .filter_map(|c| c.on_lost_pointer_capture(pointer_id))
            .collect();
        self.apply_control_events(events)
    }

    fn topmost_hit(&self, input: &PointerInput, surface: &dyn CanvasSurface) -> Option<usize> {
        self.controls
            .iter()
            .rposition(|c| c.hit_test(input.client, surface))
    }

    fn apply_control_events(&mut self, events: Vec<ControlEvent>) -> Vec<OverlayEvent> {
        let mut out = Vec::new();
        let mut positions_changed = false;
        for event in events {
            match event {
                ControlEvent::Moved { id, x, y } => {
                    let entry = self.gui_positions.entry(id).or_default();
                    entry.x = x;
                    entry.y = y;
                    positions_changed = true;
                }
                ControlEvent::Rotated { id, rotation } => {
                    let entry = self.gui_positions.entry(id).or_default();
                    *entry = BedGroupGuiPosition::new(entry.x, entry.y, rotation);
                    positions_changed = true;
                }
                ControlEvent::Clicked { id } => {
                    if self.selection.select(id.clone()) {
                        debug!("Selected bed group {}", id);
                        self.apply_selection();
                        out.push(OverlayEvent::Selected(id));
                    }
                }
            }
        }
        if positions_changed {
            self.prune_gui_positions();
            // Mapping entries are emitted before the selection, matching commit order.
            out.insert(0, OverlayEvent::GuiPositionsChanged(self.gui_positions.clone()));
        }
        out
    }

    /// Drops placement entries of bed groups that no longer exist.
    fn prune_gui_positions(&mut self) {
        let controls = &self.controls;
        let before = self.gui_positions.len();
        self.gui_positions
            .retain(|id, _| controls.iter().any(|c| c.id() == id));
        let pruned = before - self.gui_positions.len();
        if pruned > 0 {
            warn!("Pruned {} placement entries of deleted bed groups", pruned);
        }
    }

    fn apply_selection(&mut self) {
        let selected = self.selection.selected_id().map(str::to_string);
        for control in &mut self.controls {
            control.set_selected(selected.as_deref() == Some(control.id()));
        }
    }
}
