//! FILENAME: generator/src/generator.rs
//! PURPOSE: Builds random, depth-bounded expression trees.
//! CONTEXT: Each level draws a node kind from the weighted table in
//! `NodeWeights`; once `max_depth` is reached only single numbers are
//! produced, so generation always terminates. Function calls pick a
//! built-in function uniformly and generate exactly `arity` arguments.

use crate::config::GeneratorConfig;
use crate::error::GeneratorResult;
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shunting_yard::{BinaryOperator, BuiltinFunction, Expression, UnaryOperator};

/// The kinds of node the generator can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    UnaryMinus,
    UnaryPlus,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Number,
    FunctionCall,
}

pub struct RandomAstGenerator<R: Rng = StdRng> {
    rng: R,
    config: GeneratorConfig,
    kinds: Vec<NodeKind>,
    distribution: WeightedIndex<u32>,
}

impl RandomAstGenerator<StdRng> {
    /// Default configuration, seeded from the operating system.
    pub fn new() -> GeneratorResult<Self> {
        Self::with_config(GeneratorConfig::default(), StdRng::from_entropy())
    }

    /// Default configuration with a reproducible seed.
    pub fn with_seed(seed: u64) -> GeneratorResult<Self> {
        Self::with_config(GeneratorConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAstGenerator<R> {
    /// Fails if every weight is zero.
    pub fn with_config(config: GeneratorConfig, rng: R) -> GeneratorResult<Self> {
        let table = config.weights.table();
        let kinds = table.iter().map(|(kind, _)| *kind).collect();
        let distribution = WeightedIndex::new(table.iter().map(|(_, weight)| *weight))?;

        Ok(RandomAstGenerator {
            rng,
            config,
            kinds,
            distribution,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a fresh tree.
    pub fn generate(&mut self) -> Expression {
        let tree = self.generate_tree(0);
        debug!("generated tree of depth {}: {}", tree.depth(), tree);
        tree
    }

    /// Draws one node kind according to the configured weights.
    pub fn draw_kind(&mut self) -> NodeKind {
        self.kinds[self.distribution.sample(&mut self.rng)]
    }

    fn generate_tree(&mut self, level: usize) -> Expression {
        if level >= self.config.max_depth {
            return self.generate_number();
        }

        match self.draw_kind() {
            NodeKind::UnaryMinus => self.generate_unary(UnaryOperator::Minus, level),
            NodeKind::UnaryPlus => self.generate_unary(UnaryOperator::Plus, level),
            NodeKind::Add => self.generate_binary(BinaryOperator::Add, level),
            NodeKind::Subtract => self.generate_binary(BinaryOperator::Subtract, level),
            NodeKind::Multiply => self.generate_binary(BinaryOperator::Multiply, level),
            NodeKind::Divide => self.generate_binary(BinaryOperator::Divide, level),
            NodeKind::Power => self.generate_binary(BinaryOperator::Power, level),
            NodeKind::Number => self.generate_number(),
            NodeKind::FunctionCall => self.generate_function_call(level),
        }
    }

    fn generate_number(&mut self) -> Expression {
        Expression::number(self.rng.gen_range(0..=self.config.max_number))
    }

    fn generate_unary(&mut self, op: UnaryOperator, level: usize) -> Expression {
        Expression::unary(op, self.generate_tree(level + 1))
    }

    fn generate_binary(&mut self, op: BinaryOperator, level: usize) -> Expression {
        let left = self.generate_tree(level + 1);
        let right = self.generate_tree(level + 1);
        Expression::binary(left, op, right)
    }

    fn generate_function_call(&mut self, level: usize) -> Expression {
        let function = BuiltinFunction::ALL[self.rng.gen_range(0..BuiltinFunction::ALL.len())];
        let args = (0..function.arity())
            .map(|_| self.generate_tree(level + 1))
            .collect();

        Expression::call(function.name(), args)
    }
}
