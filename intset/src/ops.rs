//! Set algebra over optional set handles.
//!
//! Every function in this module accepts the absence of a set as a
//! valid input rather than an error. Absence propagates: a missing
//! operand produces a missing (or empty) answer. By contract,
//! `intersection` and `difference` also answer `None` when no element
//! qualifies, so an empty result and a missing input share one
//! representation. Callers that need to tell the two apart must track
//! their inputs themselves.

use crate::IntSet;
use tracing::debug;

/// Appends `value` to the set behind `set`, creating a fresh
/// single-element set when there is no set yet. Always returns the
/// resulting handle, so call sites can chain `s = add(s, v)`.
///
/// The value is appended whether or not it is already present.
pub fn add(set: Option<IntSet>, value: i64) -> Option<IntSet> {
    match set {
        Some(mut set) => {
            set.add(value);
            Some(set)
        }
        None => Some(IntSet::singleton(value)),
    }
}

/// Returns whether `value` is stored in the set. A missing set
/// contains nothing.
pub fn contains(set: Option<&IntSet>, value: i64) -> bool {
    set.map_or(false, |set| set.contains(value))
}

/// Number of stored values. A missing set has size zero.
pub fn size(set: Option<&IntSet>) -> usize {
    set.map_or(0, IntSet::len)
}

/// Returns a fresh set holding every element of `a`, in `a`'s
/// insertion order, that is also present in `b`. Duplicates within
/// `a` are kept; whether an element of `b` occurs once or many times
/// does not matter.
///
/// Answers `None` when either operand is missing, and also when no
/// element qualifies.
pub fn intersection(a: Option<&IntSet>, b: Option<&IntSet>) -> Option<IntSet> {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return None,
    };

    debug!(
        "Intersecting a set of {} elements with a set of {} elements.",
        a.len(),
        b.len()
    );

    let mut result = None;
    for value in a.iter() {
        if b.contains(value) {
            result = add(result, value);
        }
    }
    result
}

/// Returns a fresh set holding every element of `a`, in `a`'s
/// insertion order, that is not present in `b`. When `b` is missing
/// the whole of `a` qualifies, so the answer is a full copy of `a`
/// with independent storage.
///
/// Answers `None` when `a` is missing, and also when no element
/// qualifies.
pub fn difference(a: Option<&IntSet>, b: Option<&IntSet>) -> Option<IntSet> {
    let a = match a {
        Some(a) => a,
        None => return None,
    };

    let b = match b {
        Some(b) => b,
        None => {
            let mut copy = None;
            for value in a.iter() {
                copy = add(copy, value);
            }
            return copy;
        }
    };

    debug!(
        "Subtracting a set of {} elements from a set of {} elements.",
        b.len(),
        a.len()
    );

    let mut result = None;
    for value in a.iter() {
        if !b.contains(value) {
            result = add(result, value);
        }
    }
    result
}

/// Returns a fresh set holding every element of `a`, in `a`'s
/// insertion order, followed by every element of `b` not present in
/// `a`. Duplicates within either operand are kept.
///
/// Answers `None` when both operands are missing, and in general
/// whenever no element qualifies.
pub fn union(a: Option<&IntSet>, b: Option<&IntSet>) -> Option<IntSet> {
    let mut result = None;

    if let Some(a) = a {
        for value in a.iter() {
            result = add(result, value);
        }
    }

    if let Some(b) = b {
        for value in b.iter() {
            if !contains(a, value) {
                result = add(result, value);
            }
        }
    }

    result
}

/// Renders the set as space-separated values in insertion order, or
/// as `{}` when the set is missing or empty.
pub fn format(set: Option<&IntSet>) -> String {
    match set {
        Some(set) => set.to_string(),
        None => "{}".to_string(),
    }
}

pub fn print_set(set: Option<&IntSet>) {
    println!("{}", format(set));
}

/// Releases the set behind the handle along with all its storage.
/// Consuming the handle makes releasing the same set twice a move
/// error rather than a double free. A missing set is a no-op.
pub fn release(set: Option<IntSet>) {
    if let Some(set) = set {
        debug!("Releasing a set of {} elements.", set.len());
        drop(set);
    }
}
