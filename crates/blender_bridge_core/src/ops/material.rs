use super::{py_float, py_rgba, py_str};
use crate::types::{MaterialProperties, MaterialType};

/// Shading factors after type defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMaterial {
    pub material_type: MaterialType,
    pub metallic: f64,
    pub roughness: f64,
    pub emission: f64,
    pub transparency: f64,
}

/// (metallic, roughness, emission, transparency) for each material type.
fn type_defaults(material_type: MaterialType) -> (f64, f64, f64, f64) {
    match material_type {
        MaterialType::Metallic => (1.0, 0.1, 0.0, 0.0),
        MaterialType::Glass => (0.0, 0.0, 0.0, 0.9),
        MaterialType::Emission => (0.0, 0.5, 1.0, 0.0),
        MaterialType::Plastic => (0.0, 0.3, 0.0, 0.0),
        MaterialType::Rough => (0.0, 0.9, 0.0, 0.0),
        MaterialType::Basic => (0.0, 0.5, 0.0, 0.0),
    }
}

pub fn resolve(material: &MaterialProperties) -> ResolvedMaterial {
    let (metallic, roughness, emission, transparency) = type_defaults(material.material_type);
    ResolvedMaterial {
        material_type: material.material_type,
        metallic: material.metallic.unwrap_or(metallic),
        roughness: material.roughness.unwrap_or(roughness),
        emission: material.emission_strength.unwrap_or(emission),
        transparency: material.transparency.unwrap_or(transparency),
    }
}

/// Emit code binding a new material to the Python name `material`.
///
/// A missing or `basic` material only sets the base color.
pub fn render(
    material: Option<&MaterialProperties>,
    material_name: &str,
    color: (f64, f64, f64),
) -> String {
    let (r, g, b) = color;
    let name = py_str(material_name);

    let material = match material {
        Some(m) if m.material_type != MaterialType::Basic => resolve(m),
        _ => {
            return format!(
                r#"
# Create basic material and set color
material = bpy.data.materials.new(name={name})
material.use_nodes = True
material.node_tree.nodes["Principled BSDF"].inputs[0].default_value = {color}
"#,
                color = py_rgba(r, g, b),
            );
        }
    };

    let e = material.emission;
    let mut code = format!(
        r#"
# Create {kind} material
material = bpy.data.materials.new(name={name})
material.use_nodes = True
nodes = material.node_tree.nodes
principled = nodes["Principled BSDF"]

principled.inputs["Base Color"].default_value = {base}
principled.inputs["Metallic"].default_value = {metallic}
principled.inputs["Roughness"].default_value = {roughness}

# Input was renamed from "Emission" to "Emission Color" in Blender 4.0
try:
    principled.inputs["Emission Color"].default_value = {glow}
except KeyError:
    try:
        principled.inputs["Emission"].default_value = {glow}
    except KeyError:
        print("Warning: Could not set emission color")

try:
    principled.inputs["Emission Strength"].default_value = {emission}
except KeyError:
    print("Warning: Could not set emission strength")
"#,
        kind = material.material_type,
        base = py_rgba(r, g, b),
        metallic = py_float(material.metallic),
        roughness = py_float(material.roughness),
        glow = py_rgba(r * e, g * e, b * e),
        emission = py_float(e),
    );

    if material.transparency > 0.0 {
        code.push_str(&format!(
            r#"
try:
    principled.inputs["Alpha"].default_value = {alpha}
    material.blend_method = 'BLEND'
    material.show_transparent_back = False
except KeyError:
    print("Warning: Could not set transparency")
"#,
            alpha = py_float(1.0 - material.transparency),
        ));
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(material_type: MaterialType) -> MaterialProperties {
        MaterialProperties {
            material_type,
            ..Default::default()
        }
    }

    #[test]
    fn test_type_defaults() {
        let metal = resolve(&props(MaterialType::Metallic));
        assert_eq!((metal.metallic, metal.roughness), (1.0, 0.1));

        let glass = resolve(&props(MaterialType::Glass));
        assert_eq!(glass.transparency, 0.9);
        assert_eq!(glass.roughness, 0.0);

        let glow = resolve(&props(MaterialType::Emission));
        assert_eq!(glow.emission, 1.0);

        assert_eq!(resolve(&props(MaterialType::Plastic)).roughness, 0.3);
        assert_eq!(resolve(&props(MaterialType::Rough)).roughness, 0.9);
        assert_eq!(resolve(&props(MaterialType::Basic)).roughness, 0.5);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let material = MaterialProperties {
            material_type: MaterialType::Metallic,
            metallic: Some(0.4),
            roughness: Some(0.7),
            ..Default::default()
        };
        let resolved = resolve(&material);
        assert_eq!(resolved.metallic, 0.4);
        assert_eq!(resolved.roughness, 0.7);
        assert_eq!(resolved.emission, 0.0);
    }

    #[test]
    fn test_basic_material_only_sets_color() {
        let code = render(None, "Cube_Material", (1.0, 0.0, 0.0));
        assert!(code.contains("bpy.data.materials.new(name=\"Cube_Material\")"));
        assert!(code.contains("inputs[0].default_value = (1.0, 0.0, 0.0, 1.0)"));
        assert!(!code.contains("Metallic"));

        let same = render(Some(&props(MaterialType::Basic)), "Cube_Material", (1.0, 0.0, 0.0));
        assert_eq!(code, same);
    }

    #[test]
    fn test_emission_scales_glow_color() {
        let material = MaterialProperties {
            material_type: MaterialType::Emission,
            emission_strength: Some(2.0),
            ..Default::default()
        };
        let code = render(Some(&material), "Lamp_Material", (0.5, 0.25, 0.0));
        assert!(code.contains("Emission Color\"].default_value = (1.0, 0.5, 0.0, 1.0)"));
        assert!(code.contains("Emission Strength\"].default_value = 2.0"));
        assert!(!code.contains("Alpha"));
    }

    #[test]
    fn test_glass_sets_alpha_blend() {
        let code = render(Some(&props(MaterialType::Glass)), "Pane_Material", (0.8, 0.8, 0.8));
        assert!(code.contains("# Create glass material"));
        assert!(code.contains("blend_method = 'BLEND'"));
        // 1.0 - 0.9 in binary floating point
        assert!(code.contains(&format!("Alpha\"].default_value = {:?}", 1.0 - 0.9)));
    }
}
