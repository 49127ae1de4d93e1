use crate::Gate;
use thiserror::Error;

/// Error raised when the text contains a character outside of the expression alphabet.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LexError {
    #[error("Invalid character '{character}' at position {offset}")]
    InvalidCharacter { character: char, offset: usize },
}

/// Structural errors found while building the expression tree.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No token at all
    #[error("Empty expression cannot be evaluated")]
    Empty,

    /// Several tokens without a leading gate
    #[error("Expression must either start with a gate name or contain exactly one literal or variable name (found '{found}')")]
    MissingGate { found: String },

    /// The tokens ran out in the middle of an expression
    #[error("Expected {expected}, but reached the end of the expression")]
    UnexpectedEnd { expected: &'static str },

    /// A token does not fit at this position
    #[error("Expected {expected}, but found '{found}' at position {offset}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    /// The arguments of a gate provide more bits than its inputs
    #[error("Too many inputs for {gate} gate (expected {expected})")]
    TooManyInputs { gate: Gate, expected: usize },

    /// The argument list of a gate was closed before all inputs were filled
    #[error("Too few inputs for {gate} gate (expected {expected}) at position {offset}")]
    TooFewInputs {
        gate: Gate,
        expected: usize,
        offset: usize,
    },

    /// Something follows the closed root expression
    #[error("Unexpected '{found}' at position {offset}: more than one root expression")]
    TrailingTokens { found: String, offset: usize },

    /// Gates are nested beyond the configured limit
    #[error("Expression nesting exceeds the maximal depth ({max})")]
    TooDeep { max: usize },
}

/// Errors raised while evaluating an expression tree.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("No value provided for variable '{0}'")]
    UnboundVariable(String),
}

/// Any error returned by the calculator.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The truth table would be too large
    #[error("Too many variables for a truth table: {count} (at most {max})")]
    TooManyVariables { count: usize, max: usize },

    /// The name can not be used for a variable
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The string does not bind a name to a value
    #[error("'{0}' is not a valid binding, expected 'name=0' or 'name=1'")]
    InvalidBinding(String),

    /// The string does not describe a list of bits
    #[error("'{0}' is not a valid assignment")]
    InvalidAssignment(String),
}
