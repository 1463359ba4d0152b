//! "Final parsed parameters" blocks shown before asking for confirmation.

use blender_bridge_core::ops::curve as curve_ops;
use blender_bridge_core::ops::material as material_ops;
use blender_bridge_core::types::{
    BatchCreation, CurveCreation, DeletionAction, ManipulationType, MaterialProperties,
    ObjectCreation, ObjectDeletion, ObjectManipulation, SurfaceCreation, SurfaceType,
};

use super::{format_num, format_opt, format_triple};

fn material_line(out: &mut String, material: Option<&MaterialProperties>) {
    if let Some(m) = material {
        let resolved = material_ops::resolve(m);
        out.push_str(&format!(
            "  Material: {} (metallic {}, roughness {}, emission {}, transparency {})\n",
            resolved.material_type,
            format_num(resolved.metallic),
            format_num(resolved.roughness),
            format_num(resolved.emission),
            format_num(resolved.transparency),
        ));
    }
}

pub fn object(obj: &ObjectCreation) -> String {
    let mut out = String::from("\nFinal parsed parameters:\n");
    out.push_str(&format!("  Object Type: {}\n", obj.object_type));
    out.push_str(&format!("  Name: {}\n", obj.name));
    out.push_str(&format!(
        "  Location: {}\n",
        format_triple(obj.location_x, obj.location_y, obj.location_z)
    ));
    out.push_str(&format!("  Size: {}\n", format_num(obj.size)));
    out.push_str(&format!("  Color (RGB): {}\n", format_triple(obj.color_r, obj.color_g, obj.color_b)));
    material_line(&mut out, obj.material.as_ref());
    out
}

pub fn curve(c: &CurveCreation) -> String {
    let mut out = String::from("\nFinal curve parameters:\n");
    out.push_str(&format!("  Curve Type: {}\n", c.curve_type));
    out.push_str(&format!("  Name: {}\n", c.name));
    if curve_ops::wants_spiral(c) {
        out.push_str(&format!(
            "  Control Points: spiral with {} generated points\n",
            curve_ops::effective_points(c).len()
        ));
    } else {
        out.push_str(&format!("  Control Points: {} points\n", c.control_points.len()));
        for (i, [x, y, z]) in c.control_points.iter().enumerate() {
            out.push_str(&format!("    Point {}: {}\n", i + 1, format_triple(*x, *y, *z)));
        }
    }
    out.push_str(&format!("  Dimensions: {}\n", c.dimensions));
    out.push_str(&format!("  Resolution: {}\n", c.resolution));
    out.push_str(&format!("  Extrude Depth: {}\n", format_num(c.extrude_depth)));
    out.push_str(&format!("  Bevel Depth: {}\n", format_num(c.bevel_depth)));
    out.push_str(&format!("  Color (RGB): {}\n", format_triple(c.color_r, c.color_g, c.color_b)));
    material_line(&mut out, c.material.as_ref());
    out
}

pub fn surface(s: &SurfaceCreation) -> String {
    let mut out = String::from("\nFinal surface parameters:\n");
    out.push_str(&format!("  Surface Type: {}\n", s.surface_type));
    out.push_str(&format!("  Name: {}\n", s.name));
    match s.surface_type {
        SurfaceType::Extrude => {
            out.push_str(&format!("  Base Curve: {}\n", s.base_curve.as_deref().unwrap_or("None")));
            out.push_str(&format!("  Extrude Distance: {}\n", format_num(s.extrude_distance)));
        }
        SurfaceType::Revolve => {
            out.push_str(&format!("  Base Curve: {}\n", s.base_curve.as_deref().unwrap_or("None")));
            out.push_str(&format!("  Revolve Axis: {}\n", s.revolve_axis));
        }
        SurfaceType::Plane | SurfaceType::Grid => {
            out.push_str(&format!(
                "  Dimensions: {} x {}\n",
                format_num(s.width),
                format_num(s.height)
            ));
        }
    }
    if s.surface_type == SurfaceType::Grid {
        out.push_str(&format!("  Subdivisions: {}\n", s.subdivisions));
    }
    out.push_str(&format!("  Color (RGB): {}\n", format_triple(s.color_r, s.color_g, s.color_b)));
    material_line(&mut out, s.material.as_ref());
    out
}

pub fn batch(b: &BatchCreation) -> String {
    let mut out = String::from("\nBatch creation parameters:\n");
    out.push_str(&format!("  Total items to create: {}\n", b.len()));

    if !b.objects.is_empty() {
        out.push_str(&format!("  Objects ({}):\n", b.objects.len()));
        for (i, obj) in b.objects.iter().enumerate() {
            out.push_str(&format!(
                "    {}. {} '{}' at {}\n",
                i + 1,
                obj.object_type,
                obj.name,
                format_triple(obj.location_x, obj.location_y, obj.location_z)
            ));
        }
    }
    if !b.curves.is_empty() {
        out.push_str(&format!("  Curves ({}):\n", b.curves.len()));
        for (i, c) in b.curves.iter().enumerate() {
            out.push_str(&format!("    {}. {} curve '{}'\n", i + 1, c.curve_type, c.name));
        }
    }
    if !b.surfaces.is_empty() {
        out.push_str(&format!("  Surfaces ({}):\n", b.surfaces.len()));
        for (i, s) in b.surfaces.iter().enumerate() {
            out.push_str(&format!("    {}. {} surface '{}'\n", i + 1, s.surface_type, s.name));
        }
    }
    out
}

pub fn manipulation(m: &ObjectManipulation) -> String {
    let mut out = String::from("\nManipulation parameters:\n");
    out.push_str(&format!("  Action: {}\n", m.manipulation_type));
    out.push_str(&format!("  Object: {}\n", m.object_name));
    match m.manipulation_type {
        ManipulationType::Move => {
            out.push_str(&format!(
                "  Move offset: ({}, {}, {})\n",
                format_opt(m.move_x),
                format_opt(m.move_y),
                format_opt(m.move_z)
            ));
        }
        ManipulationType::Scale => {
            if let Some(uniform) = m.scale_uniform {
                out.push_str(&format!("  Uniform scale: {}\n", format_num(uniform)));
            } else {
                out.push_str(&format!(
                    "  Scale factors: X={}, Y={}, Z={}\n",
                    format_opt(m.scale_x),
                    format_opt(m.scale_y),
                    format_opt(m.scale_z)
                ));
            }
        }
        ManipulationType::Rotate => {
            out.push_str(&format!(
                "  Rotation (degrees): X={}, Y={}, Z={}\n",
                format_opt(m.rotate_x),
                format_opt(m.rotate_y),
                format_opt(m.rotate_z)
            ));
        }
    }
    out
}

pub fn deletion(d: &ObjectDeletion, objects: &[String]) -> String {
    let mut out = String::from("\nConfirmation required:\n");
    match d.action {
        DeletionAction::DeleteAll => {
            out.push_str(&format!("This will delete ALL {} objects:\n", objects.len()));
            for (i, name) in objects.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, name));
            }
        }
        DeletionAction::DeleteSpecific => {
            out.push_str(&format!("This will delete '{}'\n", d.target().unwrap_or_default()));
        }
    }
    out
}
