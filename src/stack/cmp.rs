// src/stack/cmp.rs
//! Equality, ordering and hashing for [`Stack`].
//!
//! Ordering is lexicographic over the shared prefix; when one stack is a
//! prefix of the other, the shorter one is less. `<`, `>`, `<=` and `>=`
//! all come from the single [`Ord::cmp`] below.

use super::core::Stack;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl PartialEq for Stack {
    fn eq(&self, other: &Self) -> bool {
        self.length() == other.length() && self.as_slice() == other.as_slice()
    }
}

impl Eq for Stack {}

impl Ord for Stack {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.as_slice(), other.as_slice());
        for (x, y) in a.iter().zip(b) {
            match x.cmp(y) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        a.len().cmp(&b.len())
    }
}

impl PartialOrd for Stack {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Capacity is not part of the value.
impl Hash for Stack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
