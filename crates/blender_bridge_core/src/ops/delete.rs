use super::py_str;
use crate::types::{DeletionAction, ObjectDeletion};
use crate::{BridgeError, Result};

pub fn render(deletion: &ObjectDeletion) -> Result<String> {
    match deletion.action {
        DeletionAction::DeleteAll => Ok(r#"
# Delete all mesh objects
mesh_objects = [obj for obj in bpy.data.objects if obj.type == 'MESH']
count = len(mesh_objects)
for obj in mesh_objects:
    bpy.data.objects.remove(obj, do_unlink=True)
print("Deleted " + str(count) + " objects")
"#
        .to_string()),
        DeletionAction::DeleteSpecific => {
            let target = deletion.target().ok_or_else(|| {
                BridgeError::validation("object_name is required for delete_specific")
            })?;
            let name = py_str(target);
            Ok(format!(
                r#"
# Delete specific object by name
if {name} in bpy.data.objects:
    obj = bpy.data.objects[{name}]
    bpy.data.objects.remove(obj, do_unlink=True)
    print("Deleted object " + {name})
else:
    print("Object " + {name} + " not found")
"#
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_all_removes_meshes() {
        let code = render(&ObjectDeletion::all()).unwrap();
        assert!(code.contains("obj.type == 'MESH'"));
        assert!(code.contains("bpy.data.objects.remove(obj, do_unlink=True)"));
    }

    #[test]
    fn test_delete_specific_targets_name() {
        let code = render(&ObjectDeletion::specific("Red \"Cube\"")).unwrap();
        assert!(code.contains("if \"Red \\\"Cube\\\"\" in bpy.data.objects:"));
    }

    #[test]
    fn test_delete_specific_without_name_fails() {
        let deletion = ObjectDeletion {
            action: DeletionAction::DeleteSpecific,
            object_name: None,
        };
        assert!(render(&deletion).is_err());
    }
}
