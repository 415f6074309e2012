//! Basic usage example for `ContiguousVec`.
//!
//! This example demonstrates building a sequence, positional insertion and
//! removal, and the contiguous slice view of the live elements.

use contiguous_vec::ContiguousVec;

fn main() {
    let mut vec = ContiguousVec::new();

    // Append some values.
    for value in 0..5_u32 {
        vec.push(value);
    }

    println!("After 5 pushes: {vec:?} (len {}, capacity {})", vec.len(), vec.capacity());

    // Insert in the middle; everything after the position shifts right.
    vec.insert(2, 99);
    println!("After insert(2, 99): {vec:?}");

    // Remove it again; the suffix shifts back left.
    let removed = vec.remove(2);
    println!("Removed {removed}, back to: {vec:?}");

    // The container derefs to a slice, so the whole slice API applies.
    let total: u32 = vec.iter().sum();
    println!("Sum of elements: {total}");
    println!("First: {:?}, last: {:?}", vec.first(), vec.last());

    // Value semantics: a clone is element-wise equal but fully independent.
    let mut cloned = vec.clone();
    cloned[0] = 1_000;
    println!("Original: {vec:?}");
    println!("Mutated clone: {cloned:?}");
}
