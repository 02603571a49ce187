//! Game implementations.

pub mod markers;
