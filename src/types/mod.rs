pub mod grouping;
pub mod note;
pub mod pitch;
pub mod sequence;
