//! FILENAME: generator/src/config.rs
//! PURPOSE: Tunable knobs of the random tree generator.
//! CONTEXT: Defaults reproduce the fixed table the round-trip tests were
//! designed around. Serde lets a test load an alternative mix from JSON.

use crate::generator::NodeKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Level at which only numbers are produced. Trees are at most
    /// `max_depth + 1` levels deep.
    pub max_depth: usize,
    /// Largest literal produced (inclusive).
    pub max_number: u64,
    pub weights: NodeWeights,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_depth: 10,
            max_number: 9,
            weights: NodeWeights::default(),
        }
    }
}

/// Relative odds of each node kind above the depth limit. Numbers are
/// heavily favored so that trees stay small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeWeights {
    pub unary_minus: u32,
    pub unary_plus: u32,
    pub add: u32,
    pub subtract: u32,
    pub multiply: u32,
    pub divide: u32,
    pub power: u32,
    pub number: u32,
    pub function_call: u32,
}

impl Default for NodeWeights {
    fn default() -> Self {
        NodeWeights {
            unary_minus: 1,
            unary_plus: 1,
            add: 2,
            subtract: 2,
            multiply: 2,
            divide: 2,
            power: 2,
            number: 7,
            function_call: 1,
        }
    }
}

impl NodeWeights {
    /// Pairs every node kind with its weight, in a fixed order.
    pub fn table(&self) -> [(NodeKind, u32); 9] {
        [
            (NodeKind::UnaryMinus, self.unary_minus),
            (NodeKind::UnaryPlus, self.unary_plus),
            (NodeKind::Add, self.add),
            (NodeKind::Subtract, self.subtract),
            (NodeKind::Multiply, self.multiply),
            (NodeKind::Divide, self.divide),
            (NodeKind::Power, self.power),
            (NodeKind::Number, self.number),
            (NodeKind::FunctionCall, self.function_call),
        ]
    }

    pub fn total(&self) -> u32 {
        self.table().iter().map(|(_, weight)| weight).sum()
    }
}
