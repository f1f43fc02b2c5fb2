pub mod object_ref;
pub mod scene;
