//! SVG rendering of the bed overlay
//! Produces the markup the site image is overlaid with:
//! - One group per bed group with its composed transform
//! - The group outline plus one rectangle per bed
//! - A shared wood-colored gradient used to fill the beds

use std::fmt::Write;

use crate::control::BedGroupControl;
use crate::overlay::BedOverlay;

/// Id of the gradient the beds are filled with.
pub const BED_GRADIENT_ID: &str = "bedGradient";

const GRADIENT_STOPS: [(&str, &str); 3] = [("0%", "#3f2915"), ("50%", "#654321"), ("100%", "#3f2915")];

/// Formats a number for an SVG attribute.
///
/// Rounds to six decimals, drops a trailing `.0` and never prints `-0`.
pub fn fmt_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6 + 0.0;
    format!("{}", rounded)
}

/// Render the gradient definitions shared by all bed groups
pub fn render_defs() -> String {
    let mut svg = String::from("<defs>");
    let _ = write!(svg, "<linearGradient id=\"{}\">", BED_GRADIENT_ID);
    for (offset, color) in GRADIENT_STOPS {
        let _ = write!(svg, "<stop offset=\"{}\" stop-color=\"{}\"/>", offset, color);
    }
    svg.push_str("</linearGradient></defs>");
    svg
}

/// Render one bed group control as an SVG group.
///
/// Empty groups render as an empty element so the overlay keeps one group
/// element per bed group.
pub fn render_control(control: &BedGroupControl) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<g data-id=\"{}\" class=\"{}\" transform=\"{}\">",
        escape_attribute(control.id()),
        control.css_classes(),
        control.transform_attribute()
    );

    let shape = control.shape();
    if shape.is_renderable() {
        let outline = shape.outline();
        let _ = write!(
            svg,
            "<rect class=\"group-outline\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/>",
            fmt_number(outline.width),
            fmt_number(outline.height)
        );
        for bed in shape.beds() {
            let _ = write!(
                svg,
                "<rect class=\"bed\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#{})\"/>",
                fmt_number(bed.x),
                fmt_number(bed.y),
                fmt_number(bed.width),
                fmt_number(bed.height),
                BED_GRADIENT_ID
            );
        }
    }

    svg.push_str("</g>");
    svg
}

/// Render the complete overlay document
pub fn render_overlay(overlay: &BedOverlay) -> String {
    let size = fmt_number(overlay.size_in_meters());
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg version=\"1.1\" width=\"100%\" height=\"100%\" viewBox=\"0 0 {} {}\" class=\"bed-overlay\" xmlns=\"http://www.w3.org/2000/svg\">",
        size, size
    );
    svg.push_str(&render_defs());
    for control in overlay.controls() {
        svg.push_str(&render_control(control));
    }
    svg.push_str("</svg>");
    svg
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
