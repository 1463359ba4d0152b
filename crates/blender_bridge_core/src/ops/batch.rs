use super::{curve, object, surface};
use crate::types::BatchCreation;
use crate::Result;

/// One script creating every item: objects first, then curves, then surfaces.
pub fn render(batch: &BatchCreation) -> Result<String> {
    let mut code = String::from("# Batch creation script\n");

    for obj in &batch.objects {
        code.push_str(&object::render(obj));
    }
    for c in &batch.curves {
        code.push_str(&curve::render(c)?);
    }
    for s in &batch.surfaces {
        code.push_str(&surface::render(s)?);
    }
    Ok(code)
}
