/// Tree traversal.
///
/// Reduces nodes to values: converts number literals and folds operators
/// across their operands from left to right.
pub mod core;

/// Binary arithmetic.
///
/// Combines an accumulator with one more operand, propagating errors and
/// applying the operator to two numbers.
pub mod binary;
