use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use crate::ops;
use crate::types::RunStatus;
use crate::{BlenderConfig, BridgeError, Result, Session};

/// How Blender is started for a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Headless run that renders a still and exits
    Background,
    /// Interactive window, not waited on
    Gui,
}

/// Anything that can execute user code inside the session scene.
pub trait ScriptRunner {
    fn run_script(&self, user_code: &str, mode: RunMode) -> Result<RunStatus>;
}

#[derive(Debug, Clone)]
pub struct BlenderClient {
    config: BlenderConfig,
    session: Session,
    script_dir: PathBuf,
}

impl BlenderClient {
    pub fn new(config: BlenderConfig, session: Session) -> Self {
        Self {
            config,
            session,
            script_dir: std::env::temp_dir(),
        }
    }

    /// Write generated scripts under `dir` instead of the system temp dir.
    pub fn with_script_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.script_dir = dir.into();
        self
    }

    pub fn config(&self) -> &BlenderConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn write_script(&self, user_code: &str, mode: RunMode) -> Result<tempfile::NamedTempFile> {
        let script = ops::session::wrap(user_code, &self.session, &self.config, mode);
        let mut file = tempfile::Builder::new()
            .prefix("blender_agent_")
            .suffix(".py")
            .tempfile_in(&self.script_dir)?;
        file.write_all(script.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    fn launch_error(&self, source: std::io::Error) -> BridgeError {
        BridgeError::launch(self.config.blender_path.clone(), source)
    }
}

impl ScriptRunner for BlenderClient {
    fn run_script(&self, user_code: &str, mode: RunMode) -> Result<RunStatus> {
        let script = self.write_script(user_code, mode)?;

        match mode {
            RunMode::Background => {
                tracing::info!(
                    "Running Blender in background: {}",
                    self.config.blender_path.display()
                );
                tracing::debug!("Script file: {}", script.path().display());

                let status = Command::new(&self.config.blender_path)
                    .arg("--background")
                    .arg("--python")
                    .arg(script.path())
                    .status()
                    .map_err(|e| self.launch_error(e))?;

                // `script` drops here and removes the temp file
                if status.success() {
                    tracing::info!("Blender finished successfully");
                    Ok(RunStatus::Succeeded)
                } else {
                    tracing::warn!("Blender exited with {}", status);
                    Ok(RunStatus::Failed {
                        code: status.code(),
                    })
                }
            }
            RunMode::Gui => {
                // The detached process reads the script after we return
                let script_path: PathBuf = script
                    .into_temp_path()
                    .keep()
                    .map_err(|e| BridgeError::Io(e.error))?;

                let child = Command::new(&self.config.blender_path)
                    .arg("--python")
                    .arg(&script_path)
                    .arg(self.session.scene_file())
                    .spawn()
                    .map_err(|e| self.launch_error(e))?;

                tracing::info!("Blender GUI launched with PID: {}", child.id());
                Ok(RunStatus::Detached { pid: child.id() })
            }
        }
    }
}
