//! Variable names and the environments binding them to values

use crate::*;

use delegate::delegate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

static RE_VARIABLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());
static RE_BINDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^=\s]+)\s*=\s*([01])\s*$").unwrap());

static _BINDING_SEPARATORS: [char; 2] = [',', ';'];

/// Test if a name can be used as a variable in an expression.
///
/// Variable names are made of ASCII letters and must differ from all gate keywords.
pub fn is_valid_name(name: &str) -> bool {
    RE_VARIABLE_NAME.is_match(name) && !Gate::is_keyword(name)
}

/// The distinct variables used in an expression.
///
/// Names are kept in lexicographic order, which defines the order of the columns of a truth table.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VariableSet {
    names: BTreeSet<String>,
}

impl VariableSet {
    delegate! {
        to self.names {
            /// Return the number of variables in this set
            pub fn len(&self) -> usize;

            /// Return whether there are no variable in this set
            pub fn is_empty(&self) -> bool;

            /// Test if a variable is part of this set
            pub fn contains(&self, name: &str) -> bool;

            /// Iterate over the variables in lexicographic order
            pub fn iter(&self) -> btree_set::Iter<'_, String>;
        }
    }

    /// Add a variable, return false if it was already in the set
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// The sorted list of variable names
    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl From<VariableSet> for Vec<String> {
    fn from(vs: VariableSet) -> Self {
        vs.names.into_iter().collect()
    }
}

/// Source of variable values used to evaluate an expression.
pub trait Environment {
    /// The value of a variable, none if it is not bound
    fn value(&self, name: &str) -> Option<bool>;
}

impl Environment for HashMap<String, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Environment for BTreeMap<String, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

/// Bind an ordered list of variables to the bits of an assignment.
///
/// This is the environment used to fill the rows of a truth table without building a map for each row.
pub(crate) struct Bindings<'a> {
    pub(crate) variables: &'a [String],
    pub(crate) assignment: &'a Assignment,
}

impl Environment for Bindings<'_> {
    fn value(&self, name: &str) -> Option<bool> {
        // the variables are sorted
        self.variables
            .binary_search_by(|v| v.as_str().cmp(name))
            .ok()
            .map(|idx| self.assignment.get(idx))
    }
}

/// A set of variables with a fixed value.
///
/// Names are checked when they are added: only valid variable names (see [is_valid_name]) are accepted.
/// A valuation can also be parsed from a list of bindings separated by commas or semicolons.
///
/// ```
/// use boolcalc::{Expr, Valuation};
/// # use boolcalc::CalcError;
/// # fn main() -> Result<(), CalcError> {
///
/// let mut valuation: Valuation = "A=1, B=0".parse()?;
/// valuation.set("C", true)?;
/// assert!(valuation.set("xor", true).is_err());
///
/// let expr: Expr = "mux(A, B, C)".parse()?;
/// assert_eq!(expr.eval(&valuation)?, vec![true]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Valuation {
    values: BTreeMap<String, bool>,
}

impl Valuation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a valuation from a list of bindings, stopping at the first invalid name
    pub fn try_from_iter<S: AsRef<str>, I: IntoIterator<Item = (S, bool)>>(
        iter: I,
    ) -> Result<Self, CalcError> {
        let mut result = Self::default();
        for (name, value) in iter {
            result.set(name.as_ref(), value)?;
        }
        Ok(result)
    }

    /// Assign a value to a variable, replacing any previous value.
    ///
    /// Returns an error if the name can not be used for a variable, in this case the valuation is not modified.
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), CalcError> {
        if !is_valid_name(name) {
            return Err(CalcError::InvalidName(name.to_string()));
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Retrieve the value of a variable
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Remove a variable and return its previous value
    pub fn unset(&mut self, name: &str) -> Option<bool> {
        self.values.remove(name)
    }

    delegate! {
        to self.values {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;

            /// Iterate over the bindings in lexicographic order of names
            pub fn iter(&self) -> btree_map::Iter<'_, String, bool>;
        }
    }
}

impl Environment for Valuation {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name)
    }
}

impl FromStr for Valuation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = Self::default();
        for binding in s.split(&_BINDING_SEPARATORS[..]).filter(|b| !b.trim().is_empty()) {
            let cap = RE_BINDING
                .captures(binding)
                .ok_or_else(|| CalcError::InvalidBinding(binding.trim().to_string()))?;
            result.set(&cap[1], &cap[2] == "1")?;
        }
        Ok(result)
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.values {
            match first {
                true => first = false,
                false => write!(f, ", ")?,
            }
            write!(f, "{}={}", name, *value as u8)?;
        }
        Ok(())
    }
}
