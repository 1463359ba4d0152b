use super::{material, py_float, py_str, py_vec3};
use crate::types::{ObjectCreation, ObjectType};

pub fn render(obj: &ObjectCreation) -> String {
    let location = py_vec3(obj.location_x, obj.location_y, obj.location_z);
    let size = py_float(obj.size);

    let create = match obj.object_type {
        ObjectType::Cube => format!(
            "bpy.ops.mesh.primitive_cube_add(location={location}, scale=({size}, {size}, {size}))"
        ),
        ObjectType::Sphere => {
            format!("bpy.ops.mesh.primitive_uv_sphere_add(location={location}, radius={size})")
        }
        ObjectType::Cylinder => format!(
            "bpy.ops.mesh.primitive_cylinder_add(location={location}, radius={size}, depth={depth})",
            depth = py_float(obj.size * 2.0),
        ),
    };

    let name = py_str(&obj.name);
    let mut code = format!(
        r#"
# Create {kind}
{create}

obj = bpy.context.active_object
obj.name = {name}
"#,
        kind = obj.object_type,
    );

    code.push_str(&material::render(
        obj.material.as_ref(),
        &format!("{}_Material", obj.name),
        (obj.color_r, obj.color_g, obj.color_b),
    ));

    code.push_str(&format!(
        r#"
obj.data.materials.append(material)

print("Created {kind} " + {name} + " successfully")
"#,
        kind = obj.object_type,
    ));
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MaterialProperties, MaterialType};

    #[test]
    fn test_cube_uses_uniform_scale() {
        let mut cube = ObjectCreation::new(ObjectType::Cube, "Box");
        cube.location_x = 3.0;
        cube.size = 2.0;
        let code = render(&cube);
        assert!(code.contains(
            "bpy.ops.mesh.primitive_cube_add(location=(3.0, 0.0, 0.0), scale=(2.0, 2.0, 2.0))"
        ));
        assert!(code.contains("obj.name = \"Box\""));
        assert!(code.contains("name=\"Box_Material\""));
        assert!(code.contains("obj.data.materials.append(material)"));
    }

    #[test]
    fn test_sphere_uses_radius() {
        let code = render(&ObjectCreation::new(ObjectType::Sphere, "Ball"));
        assert!(code.contains("primitive_uv_sphere_add(location=(0.0, 0.0, 0.0), radius=1.0)"));
    }

    #[test]
    fn test_cylinder_depth_is_twice_size() {
        let mut cylinder = ObjectCreation::new(ObjectType::Cylinder, "Pillar");
        cylinder.size = 1.5;
        let code = render(&cylinder);
        assert!(code.contains("radius=1.5, depth=3.0"));
    }

    #[test]
    fn test_advanced_material_is_embedded() {
        let mut cube = ObjectCreation::new(ObjectType::Cube, "Ingot");
        cube.material = Some(MaterialProperties {
            material_type: MaterialType::Metallic,
            ..Default::default()
        });
        let code = render(&cube);
        assert!(code.contains("# Create metallic material"));
        assert!(code.contains("principled.inputs[\"Metallic\"].default_value = 1.0"));
    }
}
