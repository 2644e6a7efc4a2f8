mod configuration_space;
mod gjk_collision_3d;
mod mpr_collision_3d;
mod pairwise;

pub use configuration_space::*;
pub use gjk_collision_3d::*;
pub use mpr_collision_3d::*;
pub use pairwise::*;

#[cfg(test)]
mod gjk_collision_3d_tests;
