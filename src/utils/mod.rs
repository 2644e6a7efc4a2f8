mod constants;
mod constants_config;
mod errors;
mod vector_math;

pub use constants::*;
pub use constants_config::*;
pub use errors::*;
pub use vector_math::*;
