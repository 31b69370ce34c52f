//! # GardenKit Designer
//!
//! Bed layout editing on top of the site image. Bed groups are drawn as
//! rectangles on an overlay canvas measured in meters and can be moved and
//! rotated directly with the pointer.
//!
//! ## Architecture
//!
//! ```text
//! BedOverlay (one canvas, sized to the site)
//!   ├── BedGroupControl (per bed group: drag/rotate state machine)
//!   ├── SelectionManager (single active bed group)
//!   └── GuiPositions (persisted placement, pruned on commit)
//!
//! CanvasSurface (screen transform, view box, pointer capture)
//!   └── Viewport (letterboxed view box with zoom and pan)
//!
//! BedGroupList (add / update / delete / select)
//! svg_renderer (overlay markup)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gardenkit_core::{BedGroup, GuiPositions};
//! use gardenkit_designer::{BedOverlay, PointerInput, Viewport};
//!
//! let group = BedGroup { id: "herbs".into(), label: "Herbs".into(), ..BedGroup::default() };
//! let mut overlay = BedOverlay::with_groups(40.0, &[group], GuiPositions::new());
//! let mut viewport = Viewport::for_site(800.0, 800.0, 40.0);
//!
//! overlay.handle_pointer(&PointerInput::down(1, 12.0, 100.0), &mut viewport);
//! let events = overlay.handle_pointer(&PointerInput::up(1, 12.0, 100.0), &mut viewport);
//! assert!(!events.is_empty());
//! ```

pub mod bed_groups;
pub mod control;
pub mod coordinates;
pub mod overlay;
pub mod selection_manager;
pub mod svg_renderer;
pub mod viewport;

pub use bed_groups::BedGroupList;
pub use control::{
    classify_hit_zone, BedGroupControl, BedGroupShape, ControlEvent, ControlState, GestureMode,
    PointerId, PointerInput, PointerPhase,
};
pub use coordinates::{
    bounding_box_in_local_space, canvas_view_box, pointer_to_canvas, pointer_to_local,
    CanvasSurface,
};
pub use overlay::{BedOverlay, OverlayEvent};
pub use selection_manager::SelectionManager;
pub use svg_renderer::render_overlay;
pub use viewport::Viewport;
