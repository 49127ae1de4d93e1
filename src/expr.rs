//! Expression trees and their evaluation

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::*;

/// A gate expression tree.
///
/// Leaves are fixed values or named variables, internal nodes are gates. A gate owns the list of
/// sub-expressions filling its inputs: as a ```dmux``` produces two output bits, a single child can fill
/// two input slots and the list of children can be shorter than the number of inputs of the gate.
///
/// ```
/// use boolcalc::{Expr, Valuation};
/// # use boolcalc::CalcError;
/// # fn main() -> Result<(), CalcError> {
///
/// let expr: Expr = "and(dmux(X, 0))".parse()?;
/// assert_eq!(expr.output_count(), 1);
///
/// let valuation: Valuation = "X=1".parse()?;
/// assert_eq!(expr.eval(&valuation)?, vec![false]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    /// A fixed Boolean value
    Literal(bool),

    /// A named variable
    Variable(String),

    /// Negation of a single bit
    Not(Box<Expr>),

    /// A two-input gate
    Binary(BinaryOp, Vec<Expr>),

    /// Select the first or second input based on the third one
    Mux(Vec<Expr>),

    /// Route the first input to one of two outputs based on the second one
    Dmux(Vec<Expr>),
}

/// Gates with two inputs and a single output.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    Nand,
    And,
    Or,
    Xor,
}

impl BinaryOp {
    pub fn gate(self) -> Gate {
        match self {
            BinaryOp::Nand => Gate::Nand,
            BinaryOp::And => Gate::And,
            BinaryOp::Or => Gate::Or,
            BinaryOp::Xor => Gate::Xor,
        }
    }

    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinaryOp::Nand => logic::nand(a, b),
            BinaryOp::And => logic::and(a, b),
            BinaryOp::Or => logic::or(a, b),
            BinaryOp::Xor => logic::xor(a, b),
        }
    }
}

impl Expr {
    /// Build the node for a gate from the list of children filling its inputs.
    ///
    /// The caller is responsible for providing children with the right number of output bits.
    pub(crate) fn gate_node(gate: Gate, mut children: Vec<Expr>) -> Self {
        match gate {
            Gate::Not => match children.pop() {
                Some(child) if children.is_empty() => Expr::Not(Box::new(child)),
                _ => panic!("a not gate requires exactly one child"),
            },
            Gate::Nand => Expr::Binary(BinaryOp::Nand, children),
            Gate::And => Expr::Binary(BinaryOp::And, children),
            Gate::Or => Expr::Binary(BinaryOp::Or, children),
            Gate::Xor => Expr::Binary(BinaryOp::Xor, children),
            Gate::Mux => Expr::Mux(children),
            Gate::Dmux => Expr::Dmux(children),
        }
    }

    /// The gate of this node, none for leaves
    pub fn gate(&self) -> Option<Gate> {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => None,
            Expr::Not(_) => Some(Gate::Not),
            Expr::Binary(op, _) => Some(op.gate()),
            Expr::Mux(_) => Some(Gate::Mux),
            Expr::Dmux(_) => Some(Gate::Dmux),
        }
    }

    /// Number of bits produced when evaluating this expression
    pub fn output_count(&self) -> usize {
        self.gate().map(|g| g.arity().outputs).unwrap_or(1)
    }

    /// The direct sub-expressions of this node
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => &[],
            Expr::Not(child) => std::slice::from_ref(child.as_ref()),
            Expr::Binary(_, children) | Expr::Mux(children) | Expr::Dmux(children) => children,
        }
    }

    /// Evaluate the expression with the given variable values.
    ///
    /// Children are evaluated first, from left to right, and their output bits are concatenated
    /// to form the inputs of the gate.
    ///
    /// Returns an error if a variable has no value in the environment.
    /// Panics if the inputs do not match the arity of a gate, which can only happen for trees which
    /// were not built by the parser.
    pub fn eval(&self, env: &impl Environment) -> Result<Vec<bool>, EvalError> {
        let result = match self {
            Expr::Literal(b) => vec![*b],
            Expr::Variable(name) => match env.value(name) {
                Some(b) => vec![b],
                None => return Err(EvalError::UnboundVariable(name.clone())),
            },
            Expr::Not(child) => {
                let inputs = self.collect_inputs(std::slice::from_ref(child.as_ref()), env)?;
                vec![logic::not(inputs[0])]
            }
            Expr::Binary(op, children) => {
                let inputs = self.collect_inputs(children, env)?;
                vec![op.apply(inputs[0], inputs[1])]
            }
            Expr::Mux(children) => {
                let inputs = self.collect_inputs(children, env)?;
                vec![logic::mux(inputs[0], inputs[1], inputs[2])]
            }
            Expr::Dmux(children) => {
                let inputs = self.collect_inputs(children, env)?;
                let (first, second) = logic::dmux(inputs[0], inputs[1]);
                vec![first, second]
            }
        };
        assert_eq!(
            result.len(),
            self.output_count(),
            "inconsistent output of {}",
            self
        );
        Ok(result)
    }

    fn collect_inputs(&self, children: &[Expr], env: &impl Environment) -> Result<Vec<bool>, EvalError> {
        let mut inputs = Vec::with_capacity(3);
        for child in children {
            inputs.extend(child.eval(env)?);
        }
        if let Some(gate) = self.gate() {
            assert_eq!(
                inputs.len(),
                gate.arity().inputs,
                "wrong number of inputs for the {} gate",
                gate
            );
        }
        Ok(inputs)
    }

    /// Add all variables used in this expression to the set
    pub fn collect_variables(&self, variables: &mut VariableSet) {
        match self {
            Expr::Literal(_) => (),
            Expr::Variable(name) => {
                variables.insert(name);
            }
            _ => self
                .children()
                .iter()
                .for_each(|c| c.collect_variables(variables)),
        }
    }

    /// Construct the set of variables used in this expression
    pub fn variables(&self) -> VariableSet {
        let mut variables = VariableSet::default();
        self.collect_variables(&mut variables);
        variables
    }

    /// Number of nested gates on the longest path from the root to a leaf
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Literal(b)
    }
}

impl FromStr for Expr {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_expression(s).map(|(expr, _)| expr)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(b) => write!(f, "{}", *b as u8),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Not(child) => write!(f, "{}({})", Gate::Not, child),
            Expr::Binary(op, children) => write!(f, "{}({})", op, children.iter().format(", ")),
            Expr::Mux(children) => write!(f, "{}({})", Gate::Mux, children.iter().format(", ")),
            Expr::Dmux(children) => write!(f, "{}({})", Gate::Dmux, children.iter().format(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::collections::HashMap;

    fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    #[test]
    fn output_counts() {
        assert_eq!(Expr::Literal(true).output_count(), 1);
        assert_eq!(var("X").output_count(), 1);
        assert_eq!(Expr::Not(Box::new(var("X"))).output_count(), 1);
        assert_eq!(
            Expr::Mux(vec![var("A"), var("B"), var("S")]).output_count(),
            1
        );
        assert_eq!(Expr::Dmux(vec![var("A"), var("S")]).output_count(), 2);
    }

    #[test]
    fn eval() -> Result<(), CalcError> {
        let expr = Expr::Mux(vec![
            var("Y"),
            Expr::Not(Box::new(var("X"))),
            var("sel"),
        ]);

        let mut env = HashMap::new();
        env.insert("X".to_string(), true);
        env.insert("Y".to_string(), true);
        env.insert("sel".to_string(), false);
        assert_eq!(expr.eval(&env)?, vec![false]);

        env.insert("sel".to_string(), true);
        assert_eq!(expr.eval(&env)?, vec![true]);

        // Same tree and environment give the same output
        assert_eq!(expr.eval(&env)?, expr.eval(&env)?);
        Ok(())
    }

    #[test]
    fn eval_multiple_outputs() -> Result<(), CalcError> {
        let dmux = Expr::Dmux(vec![Expr::Literal(true), Expr::Literal(false)]);
        let env: HashMap<String, bool> = HashMap::new();
        assert_eq!(dmux.eval(&env)?, vec![true, false]);

        // a single dmux fills both inputs of the enclosing gate
        let and = Expr::Binary(BinaryOp::And, vec![dmux.clone()]);
        assert_eq!(and.eval(&env)?, vec![false]);
        let or = Expr::Binary(BinaryOp::Or, vec![dmux]);
        assert_eq!(or.eval(&env)?, vec![true]);
        Ok(())
    }

    #[test]
    fn unbound_variable() {
        let expr = Expr::Binary(BinaryOp::Xor, vec![var("A"), var("B")]);
        let mut env = HashMap::new();
        env.insert("A".to_string(), true);
        assert_eq!(
            expr.eval(&env),
            Err(EvalError::UnboundVariable("B".to_string()))
        );
    }

    #[test]
    #[should_panic]
    fn inconsistent_tree() {
        let expr = Expr::Binary(BinaryOp::And, vec![Expr::Literal(true)]);
        let env: HashMap<String, bool> = HashMap::new();
        let _ = expr.eval(&env);
    }

    #[test]
    fn display() -> Result<(), CalcError> {
        let expr: Expr = "xor(nand(a,b),   mux(1,0,sel))".parse()?;
        assert_eq!(expr.to_string(), "xor(nand(a, b), mux(1, 0, sel))");

        let reparsed: Expr = expr.to_string().parse()?;
        assert_eq!(expr, reparsed);

        let expr: Expr = "and(dmux(X,\t1))".parse()?;
        assert_eq!(expr.to_string(), "and(dmux(X, 1))");
        Ok(())
    }

    #[test]
    fn literals() -> Result<(), CalcError> {
        assert_eq!(Expr::from(true), Expr::Literal(true));
        assert_eq!("0".parse::<Expr>()?, false.into());
        assert_eq!(Expr::from(true).to_string(), "1");
        Ok(())
    }

    #[test]
    fn variables_and_depth() -> Result<(), CalcError> {
        let expr: Expr = "or(and(B, A), not(or(B, C)))".parse()?;
        let vars = expr.variables();
        let names: Vec<&str> = vars.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(expr.depth(), 3);
        assert_eq!(Expr::Literal(false).depth(), 0);
        Ok(())
    }
}
