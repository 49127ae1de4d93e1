//! Resource limits for parsing and truth table generation

/// Bounds on the size of the expressions accepted by [compute_with](crate::compute_with).
///
/// A truth table has ```2^n``` rows for ```n``` variables, and both the parser and the evaluator
/// recurse once per nested gate: these limits keep untrusted input from exhausting memory or stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of distinct variables in a truth table.
    pub max_variables: usize,
    /// Maximum number of nested gates.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_variables: 20,
            max_depth: 256,
        }
    }
}

impl Limits {
    pub fn new(max_variables: usize, max_depth: usize) -> Self {
        Self {
            max_variables,
            max_depth,
        }
    }

    /// Large limits, for trusted input only.
    ///
    /// The nesting depth still fits the default stack of a spawned thread.
    pub fn permissive() -> Self {
        Self {
            max_variables: 28,
            max_depth: 512,
        }
    }

    /// Small limits for interactive use.
    pub fn strict() -> Self {
        Self {
            max_variables: 12,
            max_depth: 64,
        }
    }
}
