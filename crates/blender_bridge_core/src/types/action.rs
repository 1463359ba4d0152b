use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::requests::{
    BatchCreation, CurveCreation, ObjectCreation, ObjectDeletion, ObjectManipulation,
    SurfaceCreation,
};
use crate::{BridgeError, Result};

/// Type of action requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Create,
    CreateCurve,
    CreateSurface,
    BatchCreate,
    List,
    Delete,
    Manipulate,
    View,
    Help,
}

/// Structured request returned by the completion service.
///
/// Exactly one payload is expected to match `action_type`; the others stay
/// `null`. Use [`ActionRequest::into_action`] to get the typed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActionRequest {
    /// Type of action requested
    pub action_type: ActionType,
    /// Parameters for object creation
    #[serde(default)]
    pub creation_params: Option<ObjectCreation>,
    /// Parameters for curve creation
    #[serde(default)]
    pub curve_params: Option<CurveCreation>,
    /// Parameters for surface creation
    #[serde(default)]
    pub surface_params: Option<SurfaceCreation>,
    /// Parameters for batch creation
    #[serde(default)]
    pub batch_params: Option<BatchCreation>,
    /// Parameters for object deletion
    #[serde(default)]
    pub deletion_params: Option<ObjectDeletion>,
    /// Parameters for object manipulation
    #[serde(default)]
    pub manipulation_params: Option<ObjectManipulation>,
}

/// One parsed user intent with the payload its tag requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Create(ObjectCreation),
    CreateCurve(CurveCreation),
    CreateSurface(SurfaceCreation),
    BatchCreate(BatchCreation),
    List,
    Delete(ObjectDeletion),
    Manipulate(ObjectManipulation),
    View,
    Help,
}

fn require<T>(payload: Option<T>, what: &str) -> Result<T> {
    payload.ok_or_else(|| BridgeError::validation(format!("No {what} parameters found.")))
}

impl ActionRequest {
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            creation_params: None,
            curve_params: None,
            surface_params: None,
            batch_params: None,
            deletion_params: None,
            manipulation_params: None,
        }
    }

    /// Select the payload matching the tag and validate it.
    pub fn into_action(self) -> Result<Action> {
        let action = match self.action_type {
            ActionType::Create => Action::Create(require(self.creation_params, "creation")?),
            ActionType::CreateCurve => Action::CreateCurve(require(self.curve_params, "curve")?),
            ActionType::CreateSurface => {
                Action::CreateSurface(require(self.surface_params, "surface")?)
            }
            ActionType::BatchCreate => Action::BatchCreate(require(self.batch_params, "batch")?),
            ActionType::List => Action::List,
            ActionType::Delete => Action::Delete(require(self.deletion_params, "deletion")?),
            ActionType::Manipulate => {
                Action::Manipulate(require(self.manipulation_params, "manipulation")?)
            }
            ActionType::View => Action::View,
            ActionType::Help => Action::Help,
        };
        action.validate()?;
        Ok(action)
    }
}

impl Action {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Create(params) => params.validate(),
            Self::CreateCurve(params) => params.validate(),
            Self::CreateSurface(params) => params.validate(),
            Self::BatchCreate(params) => params.validate(),
            Self::Delete(params) => params.validate(),
            Self::Manipulate(params) => params.validate(),
            Self::List | Self::View | Self::Help => Ok(()),
        }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            Self::Create(_) => ActionType::Create,
            Self::CreateCurve(_) => ActionType::CreateCurve,
            Self::CreateSurface(_) => ActionType::CreateSurface,
            Self::BatchCreate(_) => ActionType::BatchCreate,
            Self::List => ActionType::List,
            Self::Delete(_) => ActionType::Delete,
            Self::Manipulate(_) => ActionType::Manipulate,
            Self::View => ActionType::View,
            Self::Help => ActionType::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::requests::{ManipulationType, ObjectType};
    use serde_json::json;

    #[test]
    fn test_create_request_maps_to_action() {
        let request: ActionRequest = serde_json::from_value(json!({
            "action_type": "create",
            "creation_params": {"object_type": "sphere", "name": "Ball", "color_r": 1.0, "color_g": 0.0, "color_b": 0.0},
            "curve_params": null
        }))
        .unwrap();

        match request.into_action().unwrap() {
            Action::Create(obj) => {
                assert_eq!(obj.object_type, ObjectType::Sphere);
                assert_eq!(obj.name, "Ball");
                assert_eq!(obj.color_r, 1.0);
            }
            other => panic!("Expected Create, got {:?}", other),
        }
    }

    #[test]
    fn test_payloadless_actions() {
        for (tag, expected) in [
            ("list", Action::List),
            ("view", Action::View),
            ("help", Action::Help),
        ] {
            let request: ActionRequest =
                serde_json::from_value(json!({ "action_type": tag })).unwrap();
            assert_eq!(request.into_action().unwrap(), expected);
        }
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        let err = ActionRequest::new(ActionType::Create).into_action().unwrap_err();
        assert_eq!(err.to_string(), "No creation parameters found.");

        let err = ActionRequest::new(ActionType::Manipulate).into_action().unwrap_err();
        assert_eq!(err.to_string(), "No manipulation parameters found.");

        let err = ActionRequest::new(ActionType::BatchCreate).into_action().unwrap_err();
        assert_eq!(err.to_string(), "No batch parameters found.");
    }

    #[test]
    fn test_payload_is_validated() {
        let request: ActionRequest = serde_json::from_value(json!({
            "action_type": "create",
            "creation_params": {"object_type": "cube", "name": "Cube", "size": -2.0}
        }))
        .unwrap();
        assert!(request.into_action().is_err());
    }

    #[test]
    fn test_mismatched_payload_is_ignored() {
        let request: ActionRequest = serde_json::from_value(json!({
            "action_type": "manipulate",
            "creation_params": {"object_type": "cube", "name": "Cube"},
            "manipulation_params": {"manipulation_type": "rotate", "object_name": "Cube", "rotate_z": 45.0}
        }))
        .unwrap();

        let action = request.into_action().unwrap();
        assert_eq!(action.action_type(), ActionType::Manipulate);
        match action {
            Action::Manipulate(m) => {
                assert_eq!(m.manipulation_type, ManipulationType::Rotate);
                assert_eq!(m.rotate_z, Some(45.0));
            }
            other => panic!("Expected Manipulate, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_lists_every_action_tag() {
        let schema = serde_json::to_value(schemars::schema_for!(ActionRequest)).unwrap();
        let text = schema.to_string();
        for tag in [
            "create",
            "create_curve",
            "create_surface",
            "batch_create",
            "list",
            "delete",
            "manipulate",
            "view",
            "help",
        ] {
            assert!(text.contains(&format!("\"{tag}\"")), "missing tag {tag}");
        }
        assert!(text.contains("control_points"));
    }
}
