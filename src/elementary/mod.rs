//! Quadratic sorts that only ever swap elements in place and need no extra memory.

pub mod bubble;
pub mod insertion;
pub mod selection;
pub mod shaker;
