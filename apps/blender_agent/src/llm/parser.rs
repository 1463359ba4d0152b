//! Turn a free-form request into a validated [`Action`].

use blender_bridge_core::types::{Action, ActionRequest};
use blender_bridge_core::NameRegistry;

use super::openai::{LlmError, OpenAiClient};
use crate::prompts;

const SCHEMA_NAME: &str = "action_request";

pub async fn parse_user_request(
    client: &OpenAiClient,
    input: &str,
    registry: &NameRegistry,
) -> Result<Action, LlmError> {
    let system = prompts::system_prompt(registry.objects());
    let schema = serde_json::to_value(schemars::schema_for!(ActionRequest))
        .map_err(|e| LlmError::MalformedJson(e.to_string()))?;

    let reply = client
        .complete_structured(&system, input, SCHEMA_NAME, schema)
        .await?;
    parse_reply(&reply)
}

/// Decode a model reply into an action. Prose or code fences around the
/// JSON object are tolerated.
pub fn parse_reply(reply: &str) -> Result<Action, LlmError> {
    let json = extract_json(reply)
        .ok_or_else(|| LlmError::MalformedJson("No JSON object found in response".to_string()))?;
    let request: ActionRequest =
        serde_json::from_str(json).map_err(|e| LlmError::MalformedJson(e.to_string()))?;

    tracing::debug!("Parsed action type: {:?}", request.action_type);
    Ok(request.into_action()?)
}

/// Slice from the first `{` to the last `}`.
pub fn extract_json(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (start <= end).then(|| &response[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use blender_bridge_core::types::{ActionType, ObjectType};

    #[test]
    fn test_extract_json_plain() {
        assert_eq!(extract_json(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_extract_json_fenced() {
        let reply = "```json\n{\"action_type\": \"help\"}\n```";
        assert_eq!(extract_json(reply), Some("{\"action_type\": \"help\"}"));
    }

    #[test]
    fn test_extract_json_with_prose() {
        let reply = "Sure! Here is the action: {\"action_type\": \"list\"} Let me know.";
        assert_eq!(extract_json(reply), Some("{\"action_type\": \"list\"}"));
    }

    #[test]
    fn test_extract_json_none() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} backwards {"), None);
    }

    #[test]
    fn test_parse_reply_create() {
        let reply = r#"{
            "action_type": "create",
            "creation_params": {
                "object_type": "cube",
                "name": "Red_Cube",
                "color_r": 1.0,
                "color_g": 0.0,
                "color_b": 0.0
            }
        }"#;
        match parse_reply(reply).unwrap() {
            Action::Create(obj) => {
                assert_eq!(obj.object_type, ObjectType::Cube);
                assert_eq!(obj.name, "Red_Cube");
                assert_eq!(obj.size, 1.0);
                assert_eq!(obj.color_r, 1.0);
            }
            other => panic!("Expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_reply_missing_payload() {
        let err = parse_reply(r#"{"action_type": "create_curve"}"#).unwrap_err();
        assert!(matches!(err, LlmError::Invalid(_)));
        assert_eq!(err.to_string(), "No curve parameters found.");
    }

    #[test]
    fn test_parse_reply_out_of_range() {
        let reply = r#"{"action_type": "create", "creation_params": {"object_type": "sphere", "name": "Ball", "size": -2}}"#;
        assert!(matches!(parse_reply(reply), Err(LlmError::Invalid(_))));
    }

    #[test]
    fn test_parse_reply_bad_json() {
        assert!(matches!(
            parse_reply(r#"{"action_type": "explode"}"#),
            Err(LlmError::MalformedJson(_))
        ));
        assert!(matches!(parse_reply("nothing"), Err(LlmError::MalformedJson(_))));
    }

    #[test]
    fn test_parse_reply_simple_actions() {
        assert_eq!(
            parse_reply(r#"{"action_type": "view"}"#).unwrap().action_type(),
            ActionType::View
        );
        assert!(matches!(parse_reply(r#"{"action_type": "list"}"#).unwrap(), Action::List));
    }
}
