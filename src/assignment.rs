//! Assignments of values to a list of variables and their canonical enumeration

use crate::CalcError;
use bit_set::BitSet;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// A fixed-width vector of bits, giving a value to each variable of an ordered list.
///
/// Positions are counted from the first variable. Internally, the assignment is the set of positions
/// associated to the ```true``` value, all other positions below the width are ```false```.
///
/// An assignment can be parsed from a string of ```0``` and ```1``` characters where spaces are ignored,
/// and is displayed in the same format.
///
/// ```
/// use boolcalc::Assignment;
///
/// let assignment: Assignment = "0 1 1".parse().unwrap();
/// assert_eq!(assignment.width(), 3);
/// assert_eq!(assignment.get(0), false);
/// assert_eq!(assignment.get(1), true);
/// assert_eq!(assignment.to_vec(), vec![false, true, true]);
/// assert_eq!(assignment.to_string(), "011");
/// ```
#[derive(Clone, Default, Debug)]
pub struct Assignment {
    active: BitSet,
    width: usize,
}

impl Assignment {
    /// Create an assignment where all positions are false
    pub fn new(width: usize) -> Self {
        Self {
            active: BitSet::with_capacity(width),
            width,
        }
    }

    /// Build the assignment corresponding to the binary representation of an integer.
    ///
    /// The first position carries the most significant bit.
    pub fn from_index(index: usize, width: usize) -> Self {
        let mut result = Self::new(width);
        for pos in 0..width {
            if (index >> (width - 1 - pos)) & 1 == 1 {
                result.active.insert(pos);
            }
        }
        result
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The value at a given position, positions beyond the width are false
    pub fn get(&self, pos: usize) -> bool {
        self.active.contains(pos)
    }

    /// Change the value at a given position.
    ///
    /// Panics if the position is beyond the width of the assignment.
    pub fn set(&mut self, pos: usize, value: bool) {
        assert!(pos < self.width, "position {} beyond width {}", pos, self.width);
        match value {
            true => self.active.insert(pos),
            false => self.active.remove(pos),
        };
    }

    /// Iterate over the values of all positions
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(move |pos| self.get(pos))
    }

    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Return the number of positions associated to true
    pub fn count_active(&self) -> usize {
        self.active.len()
    }

    /// Replace this assignment with the next one in canonical order.
    ///
    /// Returns false, leaving all positions to false, after the last assignment.
    fn increment(&mut self) -> bool {
        for pos in (0..self.width).rev() {
            if self.active.contains(pos) {
                self.active.remove(pos);
            } else {
                self.active.insert(pos);
                return true;
            }
        }
        false
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.active.iter().eq(other.active.iter())
    }
}

impl Eq for Assignment {}

impl FromIterator<bool> for Assignment {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut result = Self::default();
        for b in iter {
            if b {
                result.active.insert(result.width);
            }
            result.width += 1;
        }
        result
    }
}

impl From<&[bool]> for Assignment {
    fn from(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }
}

impl From<&Assignment> for Vec<bool> {
    fn from(assignment: &Assignment) -> Self {
        assignment.to_vec()
    }
}

impl FromStr for Assignment {
    type Err = CalcError;

    fn from_str(descr: &str) -> Result<Self, CalcError> {
        descr
            .chars()
            .filter(|c| *c != ' ' && *c != '\t')
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(CalcError::InvalidAssignment(descr.to_string())),
            })
            .collect()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.iter() {
            write!(f, "{}", b as u8)?;
        }
        Ok(())
    }
}

/// Iterator over all assignments of a given width in canonical order.
///
/// The assignments follow the integers from ```0``` to ```2^width - 1```, where the first position is the
/// most significant bit: ```000```, ```001```, ```010```, ..., ```111```.
/// For a width of 0, it produces a single empty assignment.
/// The enumeration stops when incrementing the last assignment carries out of the first position,
/// any width is accepted even if the number of assignments does not fit in a ```usize```.
#[derive(Clone, Debug)]
pub struct Assignments {
    next: Option<Assignment>,
    remaining: Option<usize>,
}

impl Assignments {
    /// Enumerate all assignments of the given width
    pub fn new(width: usize) -> Self {
        let remaining = u32::try_from(width)
            .ok()
            .and_then(|w| 1usize.checked_shl(w));
        Self {
            next: Some(Assignment::new(width)),
            remaining,
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if successor.increment() {
            self.next = Some(successor);
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.next, self.remaining) {
            (None, _) => (0, Some(0)),
            (Some(_), Some(remaining)) => (remaining, Some(remaining)),
            (Some(_), None) => (usize::MAX, None),
        }
    }
}

/// Enumerate all assignments of ```n``` variables in canonical order.
///
/// ```
/// use boolcalc::assignments;
///
/// let all: Vec<String> = assignments(2).map(|a| a.to_string()).collect();
/// assert_eq!(all, vec!["00", "01", "10", "11"]);
/// ```
pub fn assignments(n: usize) -> Assignments {
    Assignments::new(n)
}
