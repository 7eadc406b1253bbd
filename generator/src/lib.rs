//! FILENAME: generator/src/lib.rs
//! PURPOSE: Random expression trees for round-trip testing of the converter.
//! CONTEXT: A generated tree is rendered twice: directly to postfix, and to
//! infix text which is then run through `shunting_yard::to_postfix`. The two
//! results must agree for every tree.

pub mod config;
pub mod error;
pub mod generator;

#[cfg(test)]
mod tests;

pub use config::{GeneratorConfig, NodeWeights};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{NodeKind, RandomAstGenerator};
