//! Truth tables: evaluate an expression for all assignments of its variables

use crate::variable::Bindings;
use crate::*;

use itertools::Itertools;
use std::fmt;

static OUTPUT_SPACING: &str = "  ";

/// The outputs of an expression for all assignments of its variables.
///
/// The variables are sorted by name. Each row associates an assignment of these variables
/// (the first variable being the most significant bit) to the output bits of the expression.
/// If the expression has no variables, the table has a single output row and no assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub outputs: Vec<Vec<bool>>,
    pub assignments: Vec<Assignment>,
}

impl TruthTable {
    /// Evaluate an expression on all assignments of the given variables.
    ///
    /// The variables are sorted and deduplicated to form the columns of the table.
    /// They must contain all variables of the expression: evaluation stops at the first error.
    pub fn build(expr: &Expr, mut variables: Vec<String>) -> Result<Self, EvalError> {
        variables.sort_unstable();
        variables.dedup();
        if variables.is_empty() {
            let outputs = vec![expr.eval(&Valuation::new())?];
            return Ok(Self {
                variables,
                outputs,
                assignments: vec![],
            });
        }

        let rows = assignments(variables.len());
        let capacity = rows.size_hint().1.unwrap_or_default();
        let mut outputs = Vec::with_capacity(capacity);
        let mut all_assignments = Vec::with_capacity(capacity);
        for assignment in rows {
            let env = Bindings {
                variables: &variables,
                assignment: &assignment,
            };
            let output = expr.eval(&env)?;
            log::trace!("{} -> {:?}", &assignment, &output);
            outputs.push(output);
            all_assignments.push(assignment);
        }
        Ok(Self {
            variables,
            outputs,
            assignments: all_assignments,
        })
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Iterate over the rows as pairs of assignment and outputs.
    ///
    /// A table without variables yields a single row with an empty assignment.
    pub fn rows(&self) -> impl Iterator<Item = (Assignment, &[bool])> + '_ {
        self.outputs.iter().enumerate().map(move |(idx, out)| {
            let assignment = self
                .assignments
                .get(idx)
                .cloned()
                .unwrap_or_default();
            (assignment, out.as_slice())
        })
    }
}

/// Parse an expression and compute its truth table with the default [Limits].
///
/// ```
/// use boolcalc::compute;
/// # use boolcalc::CalcError;
/// # fn main() -> Result<(), CalcError> {
///
/// let table = compute("and(X,Y)")?;
/// assert_eq!(table.variables, vec!["X", "Y"]);
/// assert_eq!(table.outputs, vec![vec![false], vec![false], vec![false], vec![true]]);
/// assert_eq!(table.to_string(), "X\tY\tOutput\n0\t0\t0\n0\t1\t0\n1\t0\t0\n1\t1\t1\n");
///
/// let table = compute("dmux(1,0)")?;
/// assert!(table.variables.is_empty());
/// assert_eq!(table.to_string(), "1  0\n");
/// # Ok(())
/// # }
/// ```
pub fn compute(expression: &str) -> Result<TruthTable, CalcError> {
    compute_with(expression, &Limits::default())
}

/// Parse an expression and compute its truth table.
///
/// Returns an error if the expression is invalid, or if it exceeds the limits.
pub fn compute_with(expression: &str, limits: &Limits) -> Result<TruthTable, CalcError> {
    let (expr, variables) = parse_expression_with(expression, limits)?;
    let count = variables.len();
    if count > limits.max_variables || count >= usize::BITS as usize {
        return Err(CalcError::TooManyVariables {
            count,
            max: limits.max_variables,
        });
    }
    log::debug!("computing '{}': {} rows", &expr, 1usize << count);
    Ok(TruthTable::build(&expr, variables.into())?)
}

fn bit(b: bool) -> &'static str {
    match b {
        true => "1",
        false => "0",
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variables.is_empty() {
            for out in &self.outputs {
                writeln!(f, "{}", out.iter().map(|b| bit(*b)).join(OUTPUT_SPACING))?;
            }
            return Ok(());
        }

        for v in &self.variables {
            write!(f, "{}\t", v)?;
        }
        writeln!(f, "Output")?;
        for (assignment, out) in self.rows() {
            for b in assignment.iter() {
                write!(f, "{}\t", bit(b))?;
            }
            writeln!(f, "{}", out.iter().map(|b| bit(*b)).join(OUTPUT_SPACING))?;
        }
        Ok(())
    }
}
