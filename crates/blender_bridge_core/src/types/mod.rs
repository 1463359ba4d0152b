pub mod action;
pub mod requests;
pub mod responses;
mod validate;

pub use action::{Action, ActionRequest, ActionType};
pub use requests::{
    Axis, BatchCreation, CurveCreation, CurveDimensions, CurveType, DeletionAction,
    ManipulationType, MaterialProperties, MaterialType, ObjectCreation, ObjectDeletion,
    ObjectManipulation, ObjectType, SurfaceCreation, SurfaceType,
};
pub use responses::{Reservation, RunStatus};
