//! Boolean functions computed by the gates

pub fn nand(a: bool, b: bool) -> bool {
    !(a && b)
}

pub fn not(a: bool) -> bool {
    !a
}

pub fn and(a: bool, b: bool) -> bool {
    a && b
}

pub fn or(a: bool, b: bool) -> bool {
    a || b
}

pub fn xor(a: bool, b: bool) -> bool {
    a != b
}

/// Select ```a``` if ```sel``` is set, ```b``` otherwise.
pub fn mux(a: bool, b: bool, sel: bool) -> bool {
    match sel {
        true => a,
        false => b,
    }
}

/// Route ```a``` to the first output if ```sel``` is unset, to the second one otherwise.
///
/// The unselected output is always ```false```.
///
/// ```
/// # use boolcalc::logic::dmux;
/// assert_eq!(dmux(true, false), (true, false));
/// assert_eq!(dmux(true, true), (false, true));
/// ```
pub fn dmux(a: bool, sel: bool) -> (bool, bool) {
    match sel {
        true => (false, a),
        false => (a, false),
    }
}
