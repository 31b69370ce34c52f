use gardenkit_core::{BedGroup, BedGroupGuiPosition, GuiPositions};
use gardenkit_designer::svg_renderer::{render_control, render_defs, BED_GRADIENT_ID};
use gardenkit_designer::{render_overlay, BedOverlay};

fn overlay() -> BedOverlay {
    let groups = vec![
        BedGroup {
            id: "herbs".to_string(),
            label: "Herbs".to_string(),
            count: 3,
            ..BedGroup::default()
        },
        BedGroup {
            id: "berries".to_string(),
            label: "Berries".to_string(),
            ..BedGroup::default()
        },
    ];
    let gui: GuiPositions = [(
        "herbs".to_string(),
        BedGroupGuiPosition::new(12.5, 7.0, 30.0),
    )]
    .into_iter()
    .collect();
    BedOverlay::with_groups(62.5, &groups, gui)
}

#[test]
fn test_overlay_view_box_uses_site_size() {
    let svg = render_overlay(&overlay());
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 62.5 62.5\""));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_overlay_has_one_group_per_bed_group() {
    let svg = render_overlay(&overlay());
    assert_eq!(svg.matches("class=\"bed-group-ctrl").count(), 2);
    assert_eq!(svg.matches("class=\"bed\"").count(), 4);
    assert_eq!(svg.matches("class=\"group-outline\"").count(), 2);
}

#[test]
fn test_group_carries_transform() {
    let overlay = overlay();
    let svg = render_control(overlay.control("herbs").unwrap());
    // 3 beds of 0.6m with 0.3m spacing: 3m x 10.6m outline
    assert!(svg.contains("transform=\"translate(0, 0) translate(12.5, 7) rotate(30 1.5 5.3)\""));
    assert!(svg.contains("width=\"3\" height=\"10.6\""));
}

#[test]
fn test_selected_group_is_active() {
    let mut overlay = overlay();
    overlay.set_selected(Some("berries"));
    let svg = render_control(overlay.control("berries").unwrap());
    assert!(svg.contains("class=\"bed-group-ctrl active\""));
    let svg = render_control(overlay.control("herbs").unwrap());
    assert!(svg.contains("class=\"bed-group-ctrl\""));
}

#[test]
fn test_beds_use_gradient() {
    let defs = render_defs();
    assert!(defs.contains(&format!("<linearGradient id=\"{}\">", BED_GRADIENT_ID)));
    assert_eq!(defs.matches("<stop ").count(), 3);
    let svg = render_overlay(&overlay());
    assert!(svg.contains(&format!("fill=\"url(#{})\"", BED_GRADIENT_ID)));
}
