//! Tell the user which attributes were taken from their words and which
//! were filled in with defaults.
//!
//! This is a keyword heuristic over the raw request text, backed by a
//! comparison against the default values.

use blender_bridge_core::types::{Axis, CurveCreation, ObjectCreation, SurfaceCreation, SurfaceType};

use crate::prompts::COLOR_PRESETS;
use crate::ui::format_num;

const DEFAULT_COLOR: f64 = 0.8;

#[derive(Debug, Default, PartialEq)]
pub struct AttributeNotes {
    pub provided: Vec<String>,
    pub defaulted: Vec<String>,
}

impl AttributeNotes {
    fn check(&mut self, given: bool, label: &str, fallback: String) {
        if given {
            self.provided.push(label.to_string());
        } else {
            self.defaulted.push(fallback);
        }
    }

    /// Text block for the console, or `None` when there is nothing to say.
    pub fn render(&self, kind: &str) -> Option<String> {
        let mut lines = Vec::new();
        if !self.defaulted.is_empty() {
            lines.push(format!(
                "\nNote: The following {kind}attributes were missing, so I provided default values:"
            ));
            lines.extend(self.defaulted.iter().map(|attr| format!("  - {attr}")));
            lines.push("Let me know if you want to change any of these defaults.".to_string());
        }
        if !self.provided.is_empty() {
            lines.push(format!("\nProvided attributes: {}", self.provided.join(", ")));
        }
        (!lines.is_empty()).then(|| lines.join("\n"))
    }
}

fn mentions_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn names_itself(text: &str) -> bool {
    mentions_any(text, &["name", "call"])
}

fn mentions_color(text: &str) -> bool {
    text.contains("color") || COLOR_PRESETS.iter().any(|(name, _)| text.contains(name))
}

fn color_changed(r: f64, g: f64, b: f64) -> bool {
    [r, g, b].iter().any(|c| *c != DEFAULT_COLOR)
}

pub fn object(input: &str, obj: &ObjectCreation) -> AttributeNotes {
    let text = input.to_lowercase();
    let mut notes = AttributeNotes::default();

    if mentions_any(&text, &["cube", "sphere", "cylinder"]) {
        notes.provided.push("object type".to_string());
    }
    notes.check(
        names_itself(&text),
        "name",
        format!("name (defaulted to '{}')", obj.name),
    );
    notes.check(
        mentions_any(input, &["(", "at ", "position"])
            || obj.location_x != 0.0
            || obj.location_y != 0.0
            || obj.location_z != 0.0,
        "location",
        "location (defaulted to origin 0,0,0)".to_string(),
    );
    notes.check(
        mentions_any(&text, &["size", "scale", "radius"]) || obj.size != 1.0,
        "size",
        "size (defaulted to 1.0)".to_string(),
    );
    notes.check(
        mentions_color(&text) || color_changed(obj.color_r, obj.color_g, obj.color_b),
        "color",
        "color (defaulted to gray)".to_string(),
    );
    notes
}

pub fn curve(input: &str, curve: &CurveCreation) -> AttributeNotes {
    let text = input.to_lowercase();
    let mut notes = AttributeNotes::default();

    if mentions_any(&text, &["bezier", "nurbs", "poly", "path"]) {
        notes.provided.push("curve type".to_string());
    }
    notes.check(
        names_itself(&text),
        "name",
        format!("name (defaulted to '{}')", curve.name),
    );
    notes.check(
        text.contains("point") || mentions_any(input, &["(", ","]),
        "control points",
        format!(
            "control points (defaulted to {} points)",
            curve.control_points.len()
        ),
    );
    notes.check(
        mentions_any(&text, &["extrude", "depth"]) || curve.extrude_depth != 0.0,
        "extrude depth",
        "extrude depth (defaulted to 0.0)".to_string(),
    );
    notes.check(
        text.contains("bevel") || curve.bevel_depth != 0.0,
        "bevel depth",
        "bevel depth (defaulted to 0.0)".to_string(),
    );
    notes.check(
        mentions_any(&text, &["resolution", "smooth"]) || curve.resolution != 12,
        "resolution",
        "resolution (defaulted to 12)".to_string(),
    );
    notes.check(
        mentions_color(&text) || color_changed(curve.color_r, curve.color_g, curve.color_b),
        "color",
        "color (defaulted to gray)".to_string(),
    );
    notes
}

pub fn surface(input: &str, surface: &SurfaceCreation) -> AttributeNotes {
    let text = input.to_lowercase();
    let mut notes = AttributeNotes::default();

    if mentions_any(&text, &["extrude", "revolve", "plane", "grid"]) {
        notes.provided.push("surface type".to_string());
    }
    notes.check(
        names_itself(&text),
        "name",
        format!("name (defaulted to '{}')", surface.name),
    );

    if surface.surface_type.needs_base_curve() {
        notes.check(
            text.contains("curve") || surface.base_curve.is_some(),
            "base curve",
            "base curve (required for extrude/revolve)".to_string(),
        );
    }

    match surface.surface_type {
        SurfaceType::Extrude => notes.check(
            mentions_any(&text, &["distance", "by"]) || surface.extrude_distance != 1.0,
            "extrude distance",
            "extrude distance (defaulted to 1.0)".to_string(),
        ),
        SurfaceType::Revolve => notes.check(
            text.contains("axis") || surface.revolve_axis != Axis::Z,
            "revolve axis",
            "revolve axis (defaulted to Z)".to_string(),
        ),
        SurfaceType::Plane | SurfaceType::Grid => notes.check(
            mentions_any(&text, &["width", "height", "x", "size"])
                || surface.width != 2.0
                || surface.height != 2.0,
            "dimensions",
            format!(
                "dimensions (defaulted to {}x{})",
                format_num(surface.width),
                format_num(surface.height)
            ),
        ),
    }

    if surface.surface_type == SurfaceType::Grid {
        notes.check(
            mentions_any(&text, &["subdivision", "detail"]) || surface.subdivisions != 1,
            "subdivisions",
            "subdivisions (defaulted to 1)".to_string(),
        );
    }

    notes.check(
        mentions_color(&text)
            || color_changed(surface.color_r, surface.color_g, surface.color_b),
        "color",
        "color (defaulted to gray)".to_string(),
    );
    notes
}
