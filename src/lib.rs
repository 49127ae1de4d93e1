//! Evaluate Boolean expressions built from logic gates and compute their truth tables.
//!
//! An expression is either a fixed value (```0``` or ```1```), a named variable (a sequence of ASCII letters),
//! or a [gate](Gate) applied to a parenthesized list of arguments:
//! ```nand```, ```not```, ```and```, ```or```, ```xor```, ```mux``` and ```dmux```.
//! Each gate has a fixed number of inputs and outputs. Most gates produce a single output bit, but a ```dmux```
//! produces two of them: a single ```dmux``` argument can then fill two inputs of the enclosing gate.
//!
//! ```
//! use boolcalc::compute;
//! # use boolcalc::CalcError;
//! # fn main() -> Result<(), CalcError> {
//!
//! // Without variables, the table has a single row
//! let table = compute("and(dmux(1, 0))")?;
//! assert_eq!(table.outputs, vec![vec![false]]);
//!
//! // With variables, the table has a row for each assignment of the variables
//! let table = compute("mux(A, B, sel)")?;
//! assert_eq!(table.variables, vec!["A", "B", "sel"]);
//! assert_eq!(table.len(), 8);
//! println!("{}", table);
//! # Ok(())
//! # }
//! ```
//!
//! # Expressions and evaluation
//!
//! The text is first split into [tokens](Token), then assembled into an [expression tree](Expr) by a
//! recursive descent parser which also collects the set of [variables](VariableSet) used in the expression.
//! An expression tree can be evaluated in any [Environment] providing values for its variables,
//! for example a [Valuation] or a map.
//!
//! ```
//! use boolcalc::{parse_expression, Valuation};
//! # use boolcalc::CalcError;
//! # fn main() -> Result<(), CalcError> {
//!
//! let (expr, variables) = parse_expression("xor(X, not(Y))")?;
//! assert_eq!(variables.len(), 2);
//!
//! let valuation: Valuation = "X=1, Y=1".parse()?;
//! assert_eq!(expr.eval(&valuation)?, vec![true]);
//!
//! // Missing variables are reported
//! let partial: Valuation = "X=1".parse()?;
//! assert!(expr.eval(&partial).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables
//!
//! The columns of a [truth table](TruthTable) are the variables of the expression, sorted by name, and its rows
//! follow the canonical enumeration of [assignments]: the first variable is the most significant bit.
//! The number of rows doubles with each new variable, [Limits] bound the size of the accepted expressions.

mod assignment;
mod error;
mod expr;
mod gate;
mod limits;
pub mod logic;
mod parse;
mod table;
mod token;
mod variable;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use assignment::{assignments, Assignment, Assignments};
pub use error::{CalcError, EvalError, LexError, ParseError};
pub use expr::{BinaryOp, Expr};
pub use gate::{Arity, Gate};
pub use limits::Limits;
pub use parse::{parse_expression, parse_expression_with, parse_tokens, parse_tokens_with};
pub use table::{compute, compute_with, TruthTable};
pub use token::{tokenize, Token, TokenKind};
pub use variable::{is_valid_name, Environment, Valuation, VariableSet};
