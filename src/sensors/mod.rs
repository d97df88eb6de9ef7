//! Read-side collaborators: door latch and dirt filter.
//!
//! Both are simple level readings with no failure mode; the controller
//! treats whatever they report as ground truth.

pub mod dirt_filter;
pub mod door;
