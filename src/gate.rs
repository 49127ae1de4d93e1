//! The fixed vocabulary of logic gates

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Lookup table from keyword spelling to gate, built once on first use.
static KEYWORDS: Lazy<HashMap<&'static str, Gate>> =
    Lazy::new(|| Gate::ALL.iter().map(|g| (g.keyword(), *g)).collect());

/// The logic gates available in expressions.
///
/// Each gate is spelled with a lowercase keyword and has a fixed [Arity].
///
/// ```
/// use boolcalc::Gate;
///
/// assert_eq!(Gate::from_keyword("dmux"), Some(Gate::Dmux));
/// assert_eq!(Gate::from_keyword("DMUX"), None);
/// assert_eq!(Gate::Dmux.arity().outputs, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    Nand,
    Not,
    And,
    Or,
    Xor,
    Mux,
    Dmux,
}

/// Number of input bits consumed and output bits produced by a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arity {
    pub inputs: usize,
    pub outputs: usize,
}

impl Arity {
    const fn new(inputs: usize, outputs: usize) -> Self {
        Self { inputs, outputs }
    }
}

impl Gate {
    pub const ALL: [Gate; 7] = [
        Gate::Nand,
        Gate::Not,
        Gate::And,
        Gate::Or,
        Gate::Xor,
        Gate::Mux,
        Gate::Dmux,
    ];

    /// The exact (case-sensitive) spelling of the gate
    pub fn keyword(self) -> &'static str {
        match self {
            Gate::Nand => "nand",
            Gate::Not => "not",
            Gate::And => "and",
            Gate::Or => "or",
            Gate::Xor => "xor",
            Gate::Mux => "mux",
            Gate::Dmux => "dmux",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Gate::Not => Arity::new(1, 1),
            Gate::Nand | Gate::And | Gate::Or | Gate::Xor => Arity::new(2, 1),
            Gate::Mux => Arity::new(3, 1),
            Gate::Dmux => Arity::new(2, 2),
        }
    }

    /// Find the gate spelled by this identifier, if any
    pub fn from_keyword(word: &str) -> Option<Gate> {
        KEYWORDS.get(word).copied()
    }

    /// Test if an identifier is reserved for a gate
    pub fn is_keyword(word: &str) -> bool {
        KEYWORDS.contains_key(word)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for Gate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::from_keyword(s).ok_or_else(|| ParseError::MissingGate {
            found: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn keywords() {
        for gate in Gate::ALL {
            assert_eq!(Gate::from_keyword(gate.keyword()), Some(gate));
            assert_eq!(gate.to_string().parse::<Gate>(), Ok(gate));
        }
        assert_eq!(Gate::from_keyword("And"), None);
        assert_eq!(Gate::from_keyword("nor"), None);
        assert!(!Gate::is_keyword("X"));
        assert!("andor".parse::<Gate>().is_err());
    }

    #[test]
    fn arities() {
        assert_eq!(Gate::Not.arity(), Arity { inputs: 1, outputs: 1 });
        for g in [Gate::Nand, Gate::And, Gate::Or, Gate::Xor] {
            assert_eq!(g.arity(), Arity { inputs: 2, outputs: 1 });
        }
        assert_eq!(Gate::Mux.arity(), Arity { inputs: 3, outputs: 1 });
        assert_eq!(Gate::Dmux.arity(), Arity { inputs: 2, outputs: 2 });
    }
}
