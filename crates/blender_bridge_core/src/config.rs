use std::path::PathBuf;

#[cfg(target_os = "macos")]
const DEFAULT_BLENDER_PATH: &str = "/Applications/Blender.app/Contents/MacOS/Blender";
#[cfg(not(target_os = "macos"))]
const DEFAULT_BLENDER_PATH: &str = "blender";

const DEFAULT_RENDER_WIDTH: u32 = 800;
const DEFAULT_RENDER_HEIGHT: u32 = 600;

#[derive(Debug, Clone)]
pub struct BlenderConfig {
    pub blender_path: PathBuf,
    pub output_dir: PathBuf,
    pub render_width: u32,
    pub render_height: u32,
}

impl Default for BlenderConfig {
    fn default() -> Self {
        Self {
            blender_path: PathBuf::from(DEFAULT_BLENDER_PATH),
            output_dir: PathBuf::from("."),
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
        }
    }
}

impl BlenderConfig {
    pub fn new(blender_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            blender_path: blender_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let blender_path = std::env::var("BLENDER_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLENDER_PATH));

        let output_dir = std::env::var("BLENDER_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let render_width = std::env::var("BLENDER_RENDER_WIDTH")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RENDER_WIDTH);

        let render_height = std::env::var("BLENDER_RENDER_HEIGHT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RENDER_HEIGHT);

        Self {
            blender_path,
            output_dir,
            render_width,
            render_height,
        }
    }
}
