use serde::{Deserialize, Serialize};

/// Result of handing a script to Blender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Background run exited with status 0
    Succeeded,
    /// Background run exited non-zero, or was killed by a signal
    Failed { code: Option<i32> },
    /// GUI launched without waiting for it
    Detached { pid: u32 },
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Detached { .. })
    }
}

/// Name handed out by the registry for a requested name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub name: String,
    pub renamed: bool,
}
