//! Demonstrates the capacity model of `ContiguousVec`: doubling growth on
//! append, exact allocation via `reserve`, and value-initializing `resize`.

use contiguous_vec::ContiguousVec;

fn main() {
    // Appending grows the capacity by doubling: 0 -> 1 -> 2 -> 4 -> 8 ...
    let mut vec = ContiguousVec::new();
    let mut last_capacity = vec.capacity();

    println!("Doubling growth while pushing 20 elements:");
    for value in 0..20_u32 {
        vec.push(value);

        if vec.capacity() != last_capacity {
            last_capacity = vec.capacity();
            println!("  len {:>2} -> capacity {}", vec.len(), vec.capacity());
        }
    }

    // Reserve allocates exactly what was asked for, in one step.
    let mut reserved = ContiguousVec::<u32>::new();
    reserved.reserve(100);
    println!(
        "After reserve(100): len {}, capacity {}",
        reserved.len(),
        reserved.capacity()
    );

    // Resize value-initializes new slots and drops removed ones.
    reserved.resize(5);
    println!("After resize(5): {reserved:?}");

    reserved.resize(2);
    println!("After resize(2): {reserved:?}");
}
