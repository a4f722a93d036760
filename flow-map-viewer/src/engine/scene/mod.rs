//! Scene content: the pooled flow map spheres and the lights shading them.

/// Ambient and distant lights.
pub mod lighting;

/// Sphere pool showing the points of one timestep.
pub mod spheres;
