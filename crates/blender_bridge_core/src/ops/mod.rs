//! Renderers that turn typed requests into Blender Python.

pub mod batch;
pub mod curve;
pub mod delete;
pub mod manipulate;
pub mod material;
pub mod object;
pub mod session;
pub mod surface;

/// Quote a value as a Python string literal.
///
/// JSON string escapes are a subset of Python's, so the JSON encoding of a
/// string is a valid Python literal.
pub fn py_str(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Format a float so Python always reads it back as a float.
pub fn py_float(value: f64) -> String {
    format!("{value:?}")
}

pub(crate) fn py_vec3(x: f64, y: f64, z: f64) -> String {
    format!("({}, {}, {})", py_float(x), py_float(y), py_float(z))
}

pub(crate) fn py_rgba(r: f64, g: f64, b: f64) -> String {
    format!("({}, {}, {}, 1.0)", py_float(r), py_float(g), py_float(b))
}

/// Indent every non-empty line by `spaces`.
pub(crate) fn indent(code: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    code.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_py_str_escapes_quotes() {
        assert_eq!(py_str("Cube"), "\"Cube\"");
        assert_eq!(py_str("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(py_str("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn test_py_float_keeps_decimal_point() {
        assert_eq!(py_float(1.0), "1.0");
        assert_eq!(py_float(0.25), "0.25");
        assert_eq!(py_float(-3.0), "-3.0");
    }

    #[test]
    fn test_vec3_and_rgba() {
        assert_eq!(py_vec3(1.0, 2.0, 3.5), "(1.0, 2.0, 3.5)");
        assert_eq!(py_rgba(1.0, 0.0, 0.0), "(1.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a = 1\n\nb = 2", 4), "    a = 1\n\n    b = 2");
    }
}
