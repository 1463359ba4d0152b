use super::{py_float, py_str};
use crate::types::{ManipulationType, ObjectManipulation};

/// Fill the axes the request left out so the script always has three values.
///
/// Moves and rotations default to 0. Scales use `scale_uniform` on every axis
/// when given, otherwise 1 on each missing axis.
pub fn apply_defaults(mut manip: ObjectManipulation) -> ObjectManipulation {
    match manip.manipulation_type {
        ManipulationType::Move => {
            manip.move_x.get_or_insert(0.0);
            manip.move_y.get_or_insert(0.0);
            manip.move_z.get_or_insert(0.0);
        }
        ManipulationType::Scale => {
            if let Some(uniform) = manip.scale_uniform {
                manip.scale_x = Some(uniform);
                manip.scale_y = Some(uniform);
                manip.scale_z = Some(uniform);
            } else {
                manip.scale_x.get_or_insert(1.0);
                manip.scale_y.get_or_insert(1.0);
                manip.scale_z.get_or_insert(1.0);
            }
        }
        ManipulationType::Rotate => {
            manip.rotate_x.get_or_insert(0.0);
            manip.rotate_y.get_or_insert(0.0);
            manip.rotate_z.get_or_insert(0.0);
        }
    }
    manip
}

pub fn render(manip: &ObjectManipulation) -> String {
    let manip = apply_defaults(manip.clone());
    let name = py_str(&manip.object_name);

    let body = match manip.manipulation_type {
        ManipulationType::Move => format!(
            r#"    obj.location.x += {x}
    obj.location.y += {y}
    obj.location.z += {z}
    print("Moved " + {name} + " by ({x}, {y}, {z})")"#,
            x = py_float(manip.move_x.unwrap_or(0.0)),
            y = py_float(manip.move_y.unwrap_or(0.0)),
            z = py_float(manip.move_z.unwrap_or(0.0)),
        ),
        ManipulationType::Scale => format!(
            r#"    obj.scale.x *= {x}
    obj.scale.y *= {y}
    obj.scale.z *= {z}
    print("Scaled " + {name} + " by ({x}, {y}, {z})")"#,
            x = py_float(manip.scale_x.unwrap_or(1.0)),
            y = py_float(manip.scale_y.unwrap_or(1.0)),
            z = py_float(manip.scale_z.unwrap_or(1.0)),
        ),
        ManipulationType::Rotate => {
            let x = manip.rotate_x.unwrap_or(0.0);
            let y = manip.rotate_y.unwrap_or(0.0);
            let z = manip.rotate_z.unwrap_or(0.0);
            format!(
                r#"    obj.rotation_euler.x += {rx}
    obj.rotation_euler.y += {ry}
    obj.rotation_euler.z += {rz}
    print("Rotated " + {name} + " by ({x}, {y}, {z}) degrees")"#,
                rx = py_float(x.to_radians()),
                ry = py_float(y.to_radians()),
                rz = py_float(z.to_radians()),
                x = py_float(x),
                y = py_float(y),
                z = py_float(z),
            )
        }
    };

    format!(
        r#"
# {kind} object
if {name} in bpy.data.objects:
    obj = bpy.data.objects[{name}]
{body}
else:
    print("Object " + {name} + " not found")
"#,
        kind = manip.manipulation_type,
    )
}
