use std::path::Path;

use super::py_str;
use crate::client::RunMode;
use crate::{BlenderConfig, Session};

fn py_path(path: &Path) -> String {
    py_str(&path.to_string_lossy())
}

/// Wrap user code so every run continues the session scene.
///
/// The scene file is loaded first, the user code runs, a camera and a sun
/// are added when missing, and the scene is saved back. Background runs
/// also render a still; GUI runs switch the viewport to material preview.
pub fn wrap(user_code: &str, session: &Session, config: &BlenderConfig, mode: RunMode) -> String {
    let scene_file = py_path(session.scene_file());

    let mut script = format!(
        r#"import bpy
import os

print("=== blender_agent session {id} ===")

scene_file = {scene_file}

def clear_scene():
    bpy.ops.object.select_all(action='SELECT')
    bpy.ops.object.delete(use_global=False, confirm=False)

if os.path.exists(scene_file):
    try:
        bpy.ops.wm.open_mainfile(filepath=scene_file)
        print("Loaded session scene " + scene_file)
    except Exception as e:
        print("Could not load session scene: " + str(e))
        clear_scene()
else:
    clear_scene()
    print("Starting a new session scene")

# --- user code ---
{user_code}
# --- end user code ---

if not any(o.type == 'CAMERA' for o in bpy.data.objects):
    bpy.ops.object.camera_add(location=(7, -7, 5))
    camera = bpy.context.active_object
    camera.rotation_euler = (1.1, 0, 0.785)
    bpy.context.scene.camera = camera
    camera.hide_viewport = True
    print("Added camera")

if not any(o.type == 'LIGHT' for o in bpy.data.objects):
    bpy.ops.object.light_add(type='SUN', location=(5, 5, 10))
    print("Added sun light")

bpy.ops.wm.save_as_mainfile(filepath=scene_file)
print("Saved " + scene_file)
"#,
        id = session.id(),
    );

    match mode {
        RunMode::Background => script.push_str(&format!(
            r#"
scene = bpy.context.scene
scene.render.filepath = {render_file}
scene.render.image_settings.file_format = 'PNG'
scene.render.resolution_x = {width}
scene.render.resolution_y = {height}
bpy.ops.render.render(write_still=True)
print("Rendered " + scene.render.filepath)
"#,
            render_file = py_path(session.render_file()),
            width = config.render_width,
            height = config.render_height,
        )),
        RunMode::Gui => script.push_str(
            r#"
try:
    if bpy.context.screen:
        for area in bpy.context.screen.areas:
            if area.type == 'VIEW_3D':
                for space in area.spaces:
                    if space.type == 'VIEW_3D':
                        space.shading.type = 'MATERIAL_PREVIEW'
except Exception as e:
    print("Could not set viewport shading: " + str(e))
"#,
        ),
    }

    script
}
