use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::validate;
use crate::{BridgeError, Result};

fn default_color() -> f64 {
    0.8
}

fn default_size() -> f64 {
    1.0
}

fn default_resolution() -> u32 {
    12
}

fn default_extrude_distance() -> f64 {
    1.0
}

fn default_surface_extent() -> f64 {
    2.0
}

fn default_subdivisions() -> u32 {
    1
}

/// Treat an explicit `null` the same as a missing key.
fn null_as<'de, D, T>(deserializer: D, default: fn() -> T) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_else(default))
}

fn zero_if_null<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    null_as(d, f64::default)
}

fn resolution_if_null<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<u32, D::Error> {
    null_as(d, default_resolution)
}

fn extrude_distance_if_null<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    null_as(d, default_extrude_distance)
}

fn surface_extent_if_null<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    null_as(d, default_surface_extent)
}

fn subdivisions_if_null<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<u32, D::Error> {
    null_as(d, default_subdivisions)
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

/// Type of material surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    #[default]
    Basic,
    Metallic,
    Glass,
    Emission,
    Plastic,
    Rough,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Metallic => "metallic",
            Self::Glass => "glass",
            Self::Emission => "emission",
            Self::Plastic => "plastic",
            Self::Rough => "rough",
        }
    }
}

/// Material properties. Unset factors take the defaults of the material type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MaterialProperties {
    /// Type of material surface
    #[serde(default)]
    pub material_type: MaterialType,
    /// Metallic factor (0.0=non-metal, 1.0=pure metal)
    #[serde(default)]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub metallic: Option<f64>,
    /// Surface roughness (0.0=mirror, 1.0=rough)
    #[serde(default)]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub roughness: Option<f64>,
    /// Emission/glow strength
    #[serde(default)]
    #[schemars(range(min = 0.0))]
    pub emission_strength: Option<f64>,
    /// Transparency (0.0=opaque, 1.0=transparent)
    #[serde(default)]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub transparency: Option<f64>,
}

impl MaterialProperties {
    pub fn validate(&self) -> Result<()> {
        if let Some(metallic) = self.metallic {
            validate::unit_interval("metallic", metallic)?;
        }
        if let Some(roughness) = self.roughness {
            validate::unit_interval("roughness", roughness)?;
        }
        if let Some(emission) = self.emission_strength {
            validate::non_negative("emission_strength", emission)?;
        }
        if let Some(transparency) = self.transparency {
            validate::unit_interval("transparency", transparency)?;
        }
        Ok(())
    }
}

/// Type of 3D object to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Cube,
    Sphere,
    Cylinder,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ObjectCreation {
    /// Type of 3D object to create
    pub object_type: ObjectType,
    /// Unique name for the object
    pub name: String,
    /// X coordinate position
    #[serde(default)]
    pub location_x: f64,
    /// Y coordinate position
    #[serde(default)]
    pub location_y: f64,
    /// Z coordinate position
    #[serde(default)]
    pub location_z: f64,
    /// Size/scale of the object
    #[serde(default = "default_size")]
    #[schemars(range(min = 0.0))]
    pub size: f64,
    /// Red component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_r: f64,
    /// Green component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_g: f64,
    /// Blue component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_b: f64,
    /// Material properties
    #[serde(default)]
    pub material: Option<MaterialProperties>,
}

impl ObjectCreation {
    pub fn new(object_type: ObjectType, name: impl Into<String>) -> Self {
        Self {
            object_type,
            name: name.into(),
            location_x: 0.0,
            location_y: 0.0,
            location_z: 0.0,
            size: default_size(),
            color_r: default_color(),
            color_g: default_color(),
            color_b: default_color(),
            material: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::name("object", &self.name)?;
        validate::finite("location_x", self.location_x)?;
        validate::finite("location_y", self.location_y)?;
        validate::finite("location_z", self.location_z)?;
        validate::positive("size", self.size)?;
        validate::color(self.color_r, self.color_g, self.color_b)?;
        match &self.material {
            Some(material) => material.validate(),
            None => Ok(()),
        }
    }
}

/// Type of curve to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    Bezier,
    Nurbs,
    Poly,
}

impl CurveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bezier => "bezier",
            Self::Nurbs => "nurbs",
            Self::Poly => "poly",
        }
    }

    /// Blender spline type identifier
    pub fn spline_type(&self) -> &'static str {
        match self {
            Self::Bezier => "BEZIER",
            Self::Nurbs => "NURBS",
            Self::Poly => "POLY",
        }
    }
}

/// Curve dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CurveDimensions {
    #[serde(rename = "2D")]
    TwoD,
    #[default]
    #[serde(rename = "3D")]
    ThreeD,
}

impl CurveDimensions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoD => "2D",
            Self::ThreeD => "3D",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurveCreation {
    /// Type of curve to create
    pub curve_type: CurveType,
    /// Unique name for the curve
    pub name: String,
    /// List of 3D control points [[x1,y1,z1], [x2,y2,z2], ...]
    pub control_points: Vec<[f64; 3]>,
    /// Extrusion depth for 3D curves
    #[serde(default, deserialize_with = "zero_if_null")]
    #[schemars(range(min = 0.0))]
    pub extrude_depth: f64,
    /// Bevel depth for rounded curves
    #[serde(default, deserialize_with = "zero_if_null")]
    #[schemars(range(min = 0.0))]
    pub bevel_depth: f64,
    /// Curve resolution/smoothness
    #[serde(default = "default_resolution", deserialize_with = "resolution_if_null")]
    #[schemars(range(min = 1, max = 64))]
    pub resolution: u32,
    /// Curve dimensions
    #[serde(default)]
    pub dimensions: CurveDimensions,
    /// Red component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_r: f64,
    /// Green component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_g: f64,
    /// Blue component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_b: f64,
    /// Material properties
    #[serde(default)]
    pub material: Option<MaterialProperties>,
}

impl CurveCreation {
    pub fn new(curve_type: CurveType, name: impl Into<String>, control_points: Vec<[f64; 3]>) -> Self {
        Self {
            curve_type,
            name: name.into(),
            control_points,
            extrude_depth: 0.0,
            bevel_depth: 0.0,
            resolution: default_resolution(),
            dimensions: CurveDimensions::default(),
            color_r: default_color(),
            color_g: default_color(),
            color_b: default_color(),
            material: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::name("curve", &self.name)?;
        for (i, point) in self.control_points.iter().enumerate() {
            if point.iter().any(|c| !c.is_finite()) {
                return Err(BridgeError::validation(format!(
                    "control point {} must contain finite coordinates",
                    i + 1
                )));
            }
        }
        validate::non_negative("extrude_depth", self.extrude_depth)?;
        validate::non_negative("bevel_depth", self.bevel_depth)?;
        validate::within("resolution", self.resolution, 1, 64)?;
        validate::color(self.color_r, self.color_g, self.color_b)?;
        match &self.material {
            Some(material) => material.validate(),
            None => Ok(()),
        }
    }
}

/// Type of surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    Extrude,
    Revolve,
    Plane,
    Grid,
}

impl SurfaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extrude => "extrude",
            Self::Revolve => "revolve",
            Self::Plane => "plane",
            Self::Grid => "grid",
        }
    }

    /// Whether the surface is built from an existing curve
    pub fn needs_base_curve(&self) -> bool {
        matches!(self, Self::Extrude | Self::Revolve)
    }
}

/// Axis for revolving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceCreation {
    /// Type of surface
    pub surface_type: SurfaceType,
    /// Unique name for the surface
    pub name: String,
    /// Name of curve to base surface on
    #[serde(default)]
    pub base_curve: Option<String>,
    /// Extrude distance
    #[serde(default = "default_extrude_distance", deserialize_with = "extrude_distance_if_null")]
    pub extrude_distance: f64,
    /// Axis for revolving
    #[serde(default)]
    pub revolve_axis: Axis,
    /// Width for plane/grid surfaces
    #[serde(default = "default_surface_extent", deserialize_with = "surface_extent_if_null")]
    #[schemars(range(min = 0.0))]
    pub width: f64,
    /// Height for plane/grid surfaces
    #[serde(default = "default_surface_extent", deserialize_with = "surface_extent_if_null")]
    #[schemars(range(min = 0.0))]
    pub height: f64,
    /// Subdivisions for grid surfaces
    #[serde(default = "default_subdivisions", deserialize_with = "subdivisions_if_null")]
    #[schemars(range(min = 1, max = 20))]
    pub subdivisions: u32,
    /// Red component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_r: f64,
    /// Green component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_g: f64,
    /// Blue component (0-1)
    #[serde(default = "default_color")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub color_b: f64,
    /// Material properties
    #[serde(default)]
    pub material: Option<MaterialProperties>,
}

impl SurfaceCreation {
    pub fn new(surface_type: SurfaceType, name: impl Into<String>) -> Self {
        Self {
            surface_type,
            name: name.into(),
            base_curve: None,
            extrude_distance: default_extrude_distance(),
            revolve_axis: Axis::default(),
            width: default_surface_extent(),
            height: default_surface_extent(),
            subdivisions: default_subdivisions(),
            color_r: default_color(),
            color_g: default_color(),
            color_b: default_color(),
            material: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::name("surface", &self.name)?;
        validate::finite("extrude_distance", self.extrude_distance)?;
        validate::positive("width", self.width)?;
        validate::positive("height", self.height)?;
        validate::within("subdivisions", self.subdivisions, 1, 20)?;
        validate::color(self.color_r, self.color_g, self.color_b)?;
        match &self.material {
            Some(material) => material.validate(),
            None => Ok(()),
        }
    }
}

/// Type of deletion action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeletionAction {
    DeleteSpecific,
    DeleteAll,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ObjectDeletion {
    /// Type of deletion action
    pub action: DeletionAction,
    /// Name of object to delete (required for delete_specific)
    #[serde(default)]
    pub object_name: Option<String>,
}

impl ObjectDeletion {
    pub fn all() -> Self {
        Self {
            action: DeletionAction::DeleteAll,
            object_name: None,
        }
    }

    pub fn specific(name: impl Into<String>) -> Self {
        Self {
            action: DeletionAction::DeleteSpecific,
            object_name: Some(name.into()),
        }
    }

    /// Target name of a specific deletion
    pub fn target(&self) -> Option<&str> {
        match self.action {
            DeletionAction::DeleteSpecific => self.object_name.as_deref(),
            DeletionAction::DeleteAll => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.action == DeletionAction::DeleteSpecific
            && self.object_name.as_deref().map_or(true, |n| n.trim().is_empty())
        {
            return Err(BridgeError::validation(
                "object_name is required for delete_specific",
            ));
        }
        Ok(())
    }
}

/// Type of manipulation to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ManipulationType {
    Move,
    Scale,
    Rotate,
}

impl ManipulationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
        }
    }

    /// Past tense used in status messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Move => "moved",
            Self::Scale => "scaled",
            Self::Rotate => "rotated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ObjectManipulation {
    /// Type of manipulation to perform
    pub manipulation_type: ManipulationType,
    /// Name of object to manipulate
    #[serde(default)]
    pub object_name: String,
    /// X offset for move (relative)
    #[serde(default)]
    pub move_x: Option<f64>,
    /// Y offset for move (relative)
    #[serde(default)]
    pub move_y: Option<f64>,
    /// Z offset for move (relative)
    #[serde(default)]
    pub move_z: Option<f64>,
    /// X scale factor
    #[serde(default)]
    #[schemars(range(min = 0.0))]
    pub scale_x: Option<f64>,
    /// Y scale factor
    #[serde(default)]
    #[schemars(range(min = 0.0))]
    pub scale_y: Option<f64>,
    /// Z scale factor
    #[serde(default)]
    #[schemars(range(min = 0.0))]
    pub scale_z: Option<f64>,
    /// Uniform scale factor
    #[serde(default)]
    #[schemars(range(min = 0.0))]
    pub scale_uniform: Option<f64>,
    /// X rotation in degrees
    #[serde(default)]
    pub rotate_x: Option<f64>,
    /// Y rotation in degrees
    #[serde(default)]
    pub rotate_y: Option<f64>,
    /// Z rotation in degrees
    #[serde(default)]
    pub rotate_z: Option<f64>,
}

impl ObjectManipulation {
    pub fn new(manipulation_type: ManipulationType, object_name: impl Into<String>) -> Self {
        Self {
            manipulation_type,
            object_name: object_name.into(),
            move_x: None,
            move_y: None,
            move_z: None,
            scale_x: None,
            scale_y: None,
            scale_z: None,
            scale_uniform: None,
            rotate_x: None,
            rotate_y: None,
            rotate_z: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let offsets = [
            ("move_x", self.move_x),
            ("move_y", self.move_y),
            ("move_z", self.move_z),
            ("rotate_x", self.rotate_x),
            ("rotate_y", self.rotate_y),
            ("rotate_z", self.rotate_z),
        ];
        for (field, value) in offsets {
            if let Some(v) = value {
                validate::finite(field, v)?;
            }
        }

        let factors = [
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
            ("scale_z", self.scale_z),
            ("scale_uniform", self.scale_uniform),
        ];
        for (field, value) in factors {
            if let Some(v) = value {
                validate::positive(field, v)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchCreation {
    /// List of objects to create
    #[serde(default)]
    pub objects: Vec<ObjectCreation>,
    /// List of curves to create
    #[serde(default)]
    pub curves: Vec<CurveCreation>,
    /// List of surfaces to create
    #[serde(default)]
    pub surfaces: Vec<SurfaceCreation>,
}

impl BatchCreation {
    pub fn len(&self) -> usize {
        self.objects.len() + self.curves.len() + self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of every item in creation order
    pub fn names(&self) -> Vec<String> {
        self.objects
            .iter()
            .map(|o| o.name.clone())
            .chain(self.curves.iter().map(|c| c.name.clone()))
            .chain(self.surfaces.iter().map(|s| s.name.clone()))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(BridgeError::validation(
                "At least one object, curve, or surface must be specified",
            ));
        }
        for object in &self.objects {
            object.validate()?;
        }
        for curve in &self.curves {
            curve.validate()?;
        }
        for surface in &self.surfaces {
            surface.validate()?;
        }
        Ok(())
    }
}

display_as_str!(
    MaterialType,
    ObjectType,
    CurveType,
    CurveDimensions,
    SurfaceType,
    Axis,
    ManipulationType,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_defaults_from_minimal_json() {
        let obj: ObjectCreation =
            serde_json::from_value(json!({"object_type": "cube", "name": "Cube"})).unwrap();
        assert_eq!(obj.object_type, ObjectType::Cube);
        assert_eq!(obj.size, 1.0);
        assert_eq!((obj.color_r, obj.color_g, obj.color_b), (0.8, 0.8, 0.8));
        assert_eq!(obj.location_z, 0.0);
        assert!(obj.material.is_none());
        assert!(obj.validate().is_ok());
    }

    #[test]
    fn test_object_rejects_out_of_range_fields() {
        let mut obj = ObjectCreation::new(ObjectType::Sphere, "Ball");
        obj.size = 0.0;
        assert!(obj.validate().is_err());

        let mut obj = ObjectCreation::new(ObjectType::Sphere, "Ball");
        obj.color_g = 1.5;
        let err = obj.validate().unwrap_err();
        assert!(err.to_string().contains("color_g"));

        let mut obj = ObjectCreation::new(ObjectType::Sphere, "Ball");
        obj.material = Some(MaterialProperties {
            material_type: MaterialType::Glass,
            transparency: Some(2.0),
            ..Default::default()
        });
        assert!(obj.validate().is_err());
    }

    #[test]
    fn test_curve_null_fields_fall_back_to_defaults() {
        let curve: CurveCreation = serde_json::from_value(json!({
            "curve_type": "bezier",
            "name": "Arc",
            "control_points": [[0, 0, 0], [1, 1, 0]],
            "extrude_depth": null,
            "bevel_depth": null,
            "resolution": null
        }))
        .unwrap();
        assert_eq!(curve.extrude_depth, 0.0);
        assert_eq!(curve.bevel_depth, 0.0);
        assert_eq!(curve.resolution, 12);
        assert!(curve.validate().is_ok());
    }

    #[test]
    fn test_surface_null_fields_fall_back_to_defaults() {
        let surface: SurfaceCreation = serde_json::from_value(json!({
            "surface_type": "grid",
            "name": "Terrain",
            "extrude_distance": null,
            "width": null,
            "height": null,
            "subdivisions": null
        }))
        .unwrap();
        assert_eq!(surface.extrude_distance, 1.0);
        assert_eq!((surface.width, surface.height), (2.0, 2.0));
        assert_eq!(surface.subdivisions, 1);
        assert!(surface.validate().is_ok());
    }

    #[test]
    fn test_present_values_still_override_defaults() {
        let surface: SurfaceCreation = serde_json::from_value(json!({
            "surface_type": "plane",
            "name": "Floor",
            "width": 5.0,
            "subdivisions": 4
        }))
        .unwrap();
        assert_eq!(surface.width, 5.0);
        assert_eq!(surface.height, 2.0);
        assert_eq!(surface.subdivisions, 4);
    }

    #[test]
    fn test_unknown_object_type_fails_to_parse() {
        let result: std::result::Result<ObjectCreation, _> =
            serde_json::from_value(json!({"object_type": "torus", "name": "Ring"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_curve_parses_points_and_dimensions() {
        let curve: CurveCreation = serde_json::from_value(json!({
            "curve_type": "nurbs",
            "name": "Path",
            "control_points": [[0.0, 0.0, 0.0], [1.0, 2.0, 0.5]],
            "dimensions": "2D"
        }))
        .unwrap();
        assert_eq!(curve.control_points[1], [1.0, 2.0, 0.5]);
        assert_eq!(curve.dimensions, CurveDimensions::TwoD);
        assert_eq!(curve.resolution, 12);
        assert!(curve.validate().is_ok());
    }

    #[test]
    fn test_curve_point_must_have_three_coordinates() {
        let result: std::result::Result<CurveCreation, _> = serde_json::from_value(json!({
            "curve_type": "poly",
            "name": "Path",
            "control_points": [[0.0, 0.0]]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_curve_resolution_range() {
        let mut curve = CurveCreation::new(CurveType::Bezier, "Arc", vec![[0.0; 3], [1.0; 3]]);
        curve.resolution = 65;
        assert!(curve.validate().is_err());
        curve.resolution = 64;
        assert!(curve.validate().is_ok());
    }

    #[test]
    fn test_surface_defaults_and_limits() {
        let surface: SurfaceCreation =
            serde_json::from_value(json!({"surface_type": "grid", "name": "Floor"})).unwrap();
        assert_eq!(surface.width, 2.0);
        assert_eq!(surface.height, 2.0);
        assert_eq!(surface.subdivisions, 1);
        assert_eq!(surface.revolve_axis, Axis::Z);
        assert_eq!(surface.extrude_distance, 1.0);

        let mut surface = surface;
        surface.subdivisions = 21;
        assert!(surface.validate().is_err());
    }

    #[test]
    fn test_deletion_specific_requires_name() {
        assert!(ObjectDeletion::all().validate().is_ok());
        assert!(ObjectDeletion::specific("Cube").validate().is_ok());

        let missing = ObjectDeletion {
            action: DeletionAction::DeleteSpecific,
            object_name: None,
        };
        assert!(missing.validate().is_err());
        assert_eq!(ObjectDeletion::specific("Cube").target(), Some("Cube"));
        assert_eq!(ObjectDeletion::all().target(), None);
    }

    #[test]
    fn test_manipulation_scale_factors_must_be_positive() {
        let mut manip = ObjectManipulation::new(ManipulationType::Scale, "Cube");
        manip.scale_uniform = Some(2.0);
        assert!(manip.validate().is_ok());

        manip.scale_x = Some(-1.0);
        assert!(manip.validate().is_err());
    }

    #[test]
    fn test_batch_requires_at_least_one_item() {
        let batch = BatchCreation::default();
        let err = batch.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one object, curve, or surface must be specified"
        );

        let batch = BatchCreation {
            objects: vec![ObjectCreation::new(ObjectType::Cube, "A")],
            surfaces: vec![SurfaceCreation::new(SurfaceType::Plane, "B")],
            ..Default::default()
        };
        assert!(batch.validate().is_ok());
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.names(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(DeletionAction::DeleteAll).unwrap(), json!("delete_all"));
        assert_eq!(serde_json::to_value(CurveDimensions::ThreeD).unwrap(), json!("3D"));
        assert_eq!(serde_json::to_value(Axis::Y).unwrap(), json!("Y"));
        assert_eq!(ManipulationType::Rotate.to_string(), "rotate");
        assert_eq!(CurveType::Nurbs.spline_type(), "NURBS");
    }
}
