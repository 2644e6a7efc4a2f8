mod simulation_context;

pub use simulation_context::*;

#[cfg(test)]
mod simulation_context_tests;
