use super::{indent, material, py_float, py_str};
use crate::types::{SurfaceCreation, SurfaceType};
use crate::{BridgeError, Result};

const REVOLVE_STEPS: u32 = 16;

fn primitive(surface: &SurfaceCreation, name: &str) -> String {
    let add = match surface.surface_type {
        SurfaceType::Grid => format!(
            "bpy.ops.mesh.primitive_grid_add(x_subdivisions={n}, y_subdivisions={n}, size=1, location=(0, 0, 0))",
            n = surface.subdivisions,
        ),
        _ => "bpy.ops.mesh.primitive_plane_add(size=1, location=(0, 0, 0))".to_string(),
    };
    format!(
        r#"
{add}
obj = bpy.context.active_object
obj.name = {name}
obj.scale.x = {width}
obj.scale.y = {height}
obj.scale.z = 1.0
print("Created {kind} surface " + {name} + " with dimensions {width}x{height}")
"#,
        kind = surface.surface_type,
        width = py_float(surface.width),
        height = py_float(surface.height),
    )
}

fn duplicate_base(base_curve: &str, name: &str) -> String {
    format!(
        r#"
base_curve_name = {base}
obj = None
if base_curve_name in bpy.data.objects:
    base_curve = bpy.data.objects[base_curve_name]
    bpy.ops.object.select_all(action='DESELECT')
    bpy.context.view_layer.objects.active = base_curve
    base_curve.select_set(True)
    bpy.ops.object.duplicate()
    obj = bpy.context.active_object
    obj.name = {name}
else:
    print("Error: Base curve " + base_curve_name + " not found")
"#,
        base = py_str(base_curve),
    )
}

fn extrude(surface: &SurfaceCreation, base_curve: &str, name: &str) -> String {
    let mut code = duplicate_base(base_curve, name);
    code.push_str(&format!(
        r#"
if obj:
    obj.data.extrude = {distance}
    obj.data.bevel_depth = 0.1
    bpy.context.view_layer.objects.active = obj
    bpy.ops.object.convert(target='MESH')
    print("Created extruded surface " + {name} + " from curve " + base_curve_name)
"#,
        distance = py_float(surface.extrude_distance),
    ));
    code
}

fn revolve(surface: &SurfaceCreation, base_curve: &str, name: &str) -> String {
    let mut code = duplicate_base(base_curve, name);
    code.push_str(&format!(
        r#"
if obj:
    screw = obj.modifiers.new(name="Screw", type='SCREW')
    screw.axis = '{axis}'
    screw.angle = 6.28319
    screw.steps = {steps}
    screw.render_steps = {steps}
    bpy.context.view_layer.objects.active = obj
    bpy.ops.object.modifier_apply(modifier="Screw")
    print("Created revolved surface " + {name} + " around {axis} axis")
"#,
        axis = surface.revolve_axis,
        steps = REVOLVE_STEPS,
    ));
    code
}

pub fn render(surface: &SurfaceCreation) -> Result<String> {
    let name = py_str(&surface.name);

    let body = match surface.surface_type {
        SurfaceType::Plane | SurfaceType::Grid => primitive(surface, &name),
        SurfaceType::Extrude | SurfaceType::Revolve => {
            let base_curve = surface
                .base_curve
                .as_deref()
                .filter(|b| !b.trim().is_empty())
                .ok_or_else(|| {
                    BridgeError::validation(format!(
                        "A base curve is required for {} surfaces",
                        surface.surface_type
                    ))
                })?;
            if surface.surface_type == SurfaceType::Extrude {
                extrude(surface, base_curve, &name)
            } else {
                revolve(surface, base_curve, &name)
            }
        }
    };

    let material = material::render(
        surface.material.as_ref(),
        &format!("{}_Material", surface.name),
        (surface.color_r, surface.color_g, surface.color_b),
    );

    Ok(format!(
        r#"
# Create {kind} surface
{body}
if obj:
{material}
    obj.data.materials.append(material)
"#,
        kind = surface.surface_type,
        material = indent(&material, 4),
    ))
}
