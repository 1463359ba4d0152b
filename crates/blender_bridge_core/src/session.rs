use std::path::{Path, PathBuf};

use crate::BlenderConfig;

/// Timestamp-tagged set of output files shared by every run in one sitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: i64,
    scene_file: PathBuf,
    render_file: PathBuf,
}

impl Session {
    /// Start a session tagged with the current Unix time.
    pub fn start(config: &BlenderConfig) -> Self {
        Self::with_id(chrono::Utc::now().timestamp(), &config.output_dir)
    }

    /// Resume (or pin) a session with a known id.
    pub fn with_id(id: i64, output_dir: impl AsRef<Path>) -> Self {
        let output_dir = output_dir.as_ref();
        Self {
            id,
            scene_file: output_dir.join(format!("result_{id}.blend")),
            render_file: output_dir.join(format!("result_render_{id}.png")),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn scene_file(&self) -> &Path {
        &self.scene_file
    }

    pub fn render_file(&self) -> &Path {
        &self.render_file
    }
}
