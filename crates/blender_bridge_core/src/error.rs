use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Failed to launch Blender at '{}': {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Object '{0}' not found")]
    UnknownObject(String),
}

impl BridgeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn launch(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Launch {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_construction() {
        let err = BridgeError::validation("size must be greater than 0");
        match err {
            BridgeError::Validation(message) => {
                assert_eq!(message, "size must be greater than 0");
            }
            _ => panic!("Expected Validation variant"),
        }
    }

    #[test]
    fn test_error_display_messages() {
        let validation_err = BridgeError::validation("No creation parameters found");
        assert_eq!(validation_err.to_string(), "No creation parameters found");

        let unknown_err = BridgeError::UnknownObject("Cube_1".to_string());
        assert_eq!(unknown_err.to_string(), "Object 'Cube_1' not found");

        let launch_err = BridgeError::launch(
            "/opt/blender",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            launch_err.to_string(),
            "Failed to launch Blender at '/opt/blender': no such file"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let json_err =
            serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::Other, "test"));
        let bridge_err: BridgeError = json_err.into();
        assert!(matches!(bridge_err, BridgeError::Serialize(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bridge_err: BridgeError = io_err.into();
        match bridge_err {
            BridgeError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            _ => panic!("Expected Io variant"),
        }
    }
}
