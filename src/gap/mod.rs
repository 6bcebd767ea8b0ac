//! Sorts that compare elements a shrinking gap apart, finishing with a gap of one.

pub mod comb;
pub mod shell;
