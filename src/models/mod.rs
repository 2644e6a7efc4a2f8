mod quaternion;
mod rigid_body;
mod shape_3d;
mod simplex;
mod support_map;

pub use quaternion::*;
pub use rigid_body::*;
pub use shape_3d::*;
pub use simplex::*;
pub use support_map::*;

#[cfg(test)]
mod rigid_body_tests;
#[cfg(test)]
mod simplex_tests;
