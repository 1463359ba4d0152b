use std::f64::consts::PI;

use super::{material, py_float, py_str};
use crate::types::{CurveCreation, CurveType};
use crate::{BridgeError, Result};

const SPIRAL_TURNS: usize = 3;
const SPIRAL_POINTS_PER_TURN: usize = 8;
const SPIRAL_RADIUS_START: f64 = 0.5;
const SPIRAL_RADIUS_END: f64 = 2.0;
const SPIRAL_HEIGHT_PER_TURN: f64 = 1.0;

/// Points of a widening helix: 3 turns, 8 points per turn, inclusive ends.
pub fn spiral_points() -> Vec<[f64; 3]> {
    let steps = SPIRAL_TURNS * SPIRAL_POINTS_PER_TURN;
    (0..=steps)
        .map(|i| {
            let t = i as f64 / SPIRAL_POINTS_PER_TURN as f64;
            let angle = t * 2.0 * PI;
            let radius = SPIRAL_RADIUS_START
                + (SPIRAL_RADIUS_END - SPIRAL_RADIUS_START) * (t / SPIRAL_TURNS as f64);
            [radius * angle.cos(), radius * angle.sin(), t * SPIRAL_HEIGHT_PER_TURN]
        })
        .collect()
}

/// Curves named like a spiral with only a handful of points get a generated helix.
pub fn wants_spiral(curve: &CurveCreation) -> bool {
    curve.name.to_lowercase().contains("spiral") && curve.control_points.len() <= 4
}

/// Control points that will actually be sent to Blender.
pub fn effective_points(curve: &CurveCreation) -> Vec<[f64; 3]> {
    if wants_spiral(curve) {
        spiral_points()
    } else {
        curve.control_points.clone()
    }
}

fn py_points(points: &[[f64; 3]]) -> String {
    let items: Vec<String> = points
        .iter()
        .map(|[x, y, z]| format!("[{}, {}, {}]", py_float(*x), py_float(*y), py_float(*z)))
        .collect();
    format!("[{}]", items.join(", "))
}

pub fn render(curve: &CurveCreation) -> Result<String> {
    let points = effective_points(curve);
    if wants_spiral(curve) {
        tracing::debug!("Generated spiral with {} control points for {}", points.len(), curve.name);
    }
    if points.len() < 2 {
        return Err(BridgeError::validation(format!(
            "Curve '{}' needs at least 2 control points, got {}",
            curve.name,
            points.len()
        )));
    }

    let name = py_str(&curve.name);
    let mut code = format!(
        r#"
# Create {kind} curve
from mathutils import Vector

curve_data = bpy.data.curves.new(name={name}, type='CURVE')
curve_data.dimensions = '{dimensions}'
curve_data.resolution_u = {resolution}
curve_data.extrude = {extrude}
curve_data.bevel_depth = {bevel}

spline = curve_data.splines.new('{spline}')
control_points = {points}
"#,
        kind = curve.curve_type,
        dimensions = curve.dimensions,
        resolution = curve.resolution,
        extrude = py_float(curve.extrude_depth),
        bevel = py_float(curve.bevel_depth),
        spline = curve.curve_type.spline_type(),
        points = py_points(&points),
    );

    match curve.curve_type {
        CurveType::Bezier => code.push_str(
            r#"
spline.bezier_points.add(len(control_points) - 1)
for i, point in enumerate(control_points):
    bezier_point = spline.bezier_points[i]
    bezier_point.co = Vector(point)
    bezier_point.handle_left_type = 'AUTO'
    bezier_point.handle_right_type = 'AUTO'
"#,
        ),
        CurveType::Nurbs | CurveType::Poly => code.push_str(
            r#"
spline.points.add(len(control_points) - 1)
for i, point in enumerate(control_points):
    spline.points[i].co = (point[0], point[1], point[2], 1.0)
"#,
        ),
    }

    code.push_str(&format!(
        r#"
curve_obj = bpy.data.objects.new({name}, curve_data)
bpy.context.collection.objects.link(curve_obj)
bpy.context.view_layer.objects.active = curve_obj
curve_obj.select_set(True)
"#
    ));

    code.push_str(&material::render(
        curve.material.as_ref(),
        &format!("{}_Material", curve.name),
        (curve.color_r, curve.color_g, curve.color_b),
    ));

    code.push_str(&format!(
        r#"
curve_obj.data.materials.append(material)

print("Created {kind} curve " + {name} + " with " + str(len(control_points)) + " control points")
"#,
        kind = curve.curve_type,
    ));
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CurveDimensions;

    fn line(name: &str, points: Vec<[f64; 3]>) -> CurveCreation {
        CurveCreation::new(CurveType::Poly, name, points)
    }

    #[test]
    fn test_spiral_shape() {
        let points = spiral_points();
        assert_eq!(points.len(), 25);
        assert_eq!(points[0], [0.5, 0.0, 0.0]);

        let last = points[24];
        assert!((last[0] - 2.0).abs() < 1e-9);
        assert!(last[1].abs() < 1e-9);
        assert!((last[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_spiral_substitution_by_name() {
        let spiral = line("My_Spiral", vec![[0.0; 3], [1.0; 3]]);
        assert!(wants_spiral(&spiral));
        assert_eq!(effective_points(&spiral).len(), 25);

        let detailed = line("spiral", vec![[0.0; 3]; 5]);
        assert!(!wants_spiral(&detailed));
        assert_eq!(effective_points(&detailed).len(), 5);
    }

    #[test]
    fn test_spiral_named_curve_with_no_points_still_renders() {
        let spiral = line("spiral", vec![]);
        let code = render(&spiral).unwrap();
        assert!(code.contains("control_points = [[0.5, 0.0, 0.0]"));
    }

    #[test]
    fn test_too_few_points_is_an_error() {
        let err = render(&line("Stub", vec![[0.0; 3]])).unwrap_err();
        assert_eq!(err.to_string(), "Curve 'Stub' needs at least 2 control points, got 1");
    }

    #[test]
    fn test_bezier_uses_auto_handles() {
        let mut curve = CurveCreation::new(CurveType::Bezier, "Arc", vec![[0.0; 3], [1.0, 1.0, 0.0]]);
        curve.dimensions = CurveDimensions::TwoD;
        curve.bevel_depth = 0.1;
        let code = render(&curve).unwrap();
        assert!(code.contains("splines.new('BEZIER')"));
        assert!(code.contains("handle_left_type = 'AUTO'"));
        assert!(code.contains("curve_data.dimensions = '2D'"));
        assert!(code.contains("curve_data.bevel_depth = 0.1"));
        assert!(code.contains("control_points = [[0.0, 0.0, 0.0], [1.0, 1.0, 0.0]]"));
    }

    #[test]
    fn test_poly_uses_weighted_points() {
        let code = render(&line("Path", vec![[0.0; 3], [2.0, 0.0, 0.0]])).unwrap();
        assert!(code.contains("splines.new('POLY')"));
        assert!(code.contains("spline.points[i].co = (point[0], point[1], point[2], 1.0)"));
        assert!(code.contains("bpy.data.objects.new(\"Path\", curve_data)"));
        assert!(code.contains("resolution_u = 12"));
    }
}
