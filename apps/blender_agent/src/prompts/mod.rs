use crate::ui::format_triple;

/// Named colors the model can map to RGB in [0, 1].
pub const COLOR_PRESETS: &[(&str, (f64, f64, f64))] = &[
    ("red", (1.0, 0.0, 0.0)),
    ("green", (0.0, 1.0, 0.0)),
    ("blue", (0.0, 0.0, 1.0)),
    ("yellow", (1.0, 1.0, 0.0)),
    ("purple", (1.0, 0.0, 1.0)),
    ("cyan", (0.0, 1.0, 1.0)),
    ("white", (1.0, 1.0, 1.0)),
    ("black", (0.0, 0.0, 0.0)),
    ("gray", (0.5, 0.5, 0.5)),
    ("grey", (0.5, 0.5, 0.5)),
];

const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are a 3D Blender modeling assistant. Parse the user's request and decide which action it asks for.

CURRENT OBJECTS IN SCENE: {current_objects}

SUPPORTED ACTIONS:
1. create: "create", "make", "add" + a single object (cube/sphere/cylinder)
2. create_curve: "create curve", "make curve", "bezier curve", "spiral curve" + a single curve
3. create_surface: "create surface", "make surface", "create plane/grid", "extrude", "revolve" + a single surface
4. batch_create: several items in one request
5. list: "list", "show", "what objects"
6. delete: "delete", "remove" + object name, or "delete all"
7. manipulate: "move", "scale", "rotate" + object name + amounts
8. view: "view", "show scene", "open blender", "display scene"
9. help: "help", "guide", "what can I do", "instructions"

Fill only the parameter block that matches action_type and leave the others null.

BATCH DETECTION (use batch_create):
- More than one object is mentioned: "create a red cube and a blue sphere"
- A quantity of any kind is given: "create 3 cubes", "make 5 planes", "create 4 grids"
- Several surfaces or curves: "create 3 red planes and 2 blue grids", "create 2 bezier curves and 1 spiral"
- Mixed scenes: "create 2 cubes, 3 planes, and 1 curve"
Put each item in the objects, curves or surfaces list it belongs to and give every item its own name.

Examples:
- "create 3 planes" -> surfaces=[plane_1, plane_2, plane_3] spaced along X
- "make 5 red grids" -> surfaces=[5 red grids spaced out]
- "create 2 cubes and 3 planes" -> objects=[2 cubes], surfaces=[3 planes]
- "create 2 spirals" -> curves=[spiral_1, spiral_2] spaced along X

POSITIONING FOR BATCH CREATION:
- Spread items along the X axis with 3 units between them
- For more than 5 items, arrange them in a grid pattern
- Keep Y and Z at 0 unless the user gives them

CURVES:
- Give at least 2 control points as [x, y, z] triples
- A curve whose name contains "spiral" gets a generated helix

SURFACES:
- extrude and revolve need base_curve set to an existing curve name

MANIPULATION:
- Offsets are relative; rotation is in degrees; scale is a multiplier
- Use an empty object_name if the user does not say which object

COLOR PRESETS (RGB): {color_presets}
"#;

/// System prompt for request parsing, listing what is already in the scene.
pub fn system_prompt(current_objects: &[String]) -> String {
    let current = if current_objects.is_empty() {
        "none".to_string()
    } else {
        current_objects.join(", ")
    };
    let colors = COLOR_PRESETS
        .iter()
        .map(|(name, (r, g, b))| format!("{name}: {}", format_triple(*r, *g, *b)))
        .collect::<Vec<_>>()
        .join(", ");

    SYSTEM_PROMPT_TEMPLATE
        .replace("{current_objects}", &current)
        .replace("{color_presets}", &colors)
}

pub const BANNER: &str = r#"==================================================
    BLENDER 3D MODELING AGENT
==================================================
Available commands:
- create objects (cube, sphere, cylinder)
- create curves and surfaces (bezier curve, spiral, plane, grid)
- create multiple objects (3 red cubes and 2 blue spheres)
- move, scale or rotate objects
- delete objects
- list objects
- view scene
- help
- quit

Examples:
'create red cube'
'create 3 green cubes and 2 blue spheres'
'help'
=================================================="#;

pub const HELP_TEXT: &str = r#"======================================================================
    DETAILED USAGE GUIDE
======================================================================

SUPPORTED ACTIONS:

1. CREATE SINGLE OBJECTS:
   Examples: 'create red cube', 'create blue sphere of size 2 at (3, 0, 0)'

2. CREATE CURVES AND SURFACES:
   - 'create a bezier curve called Path'
   - 'make a spiral curve'
   - 'create a 4 by 3 plane'
   - 'extrude Path by 2'
   - 'revolve Profile around the Y axis'

3. CREATE MULTIPLE OBJECTS (BATCH):
   - 'create 3 red cubes and 2 blue spheres'
   - 'make 5 green cylinders'
   - 'create a red cube and metallic sphere'

4. EDIT THE SCENE:
   - 'move Cube up by 2'
   - 'scale Sphere by 1.5'
   - 'rotate Cylinder 45 degrees around Z'
   - 'delete Cube' or 'delete all'

5. OTHER ACTIONS:
   - 'list objects' - show all objects in the scene
   - 'view scene' - open the Blender GUI
   - 'help' - show this guide
   - 'quit' - exit the program

Available colors: red, green, blue, yellow, purple, cyan, white, black, gray
Available materials: metallic, glass, emission, plastic, rough
======================================================================"#;
