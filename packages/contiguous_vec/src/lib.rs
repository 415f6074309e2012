//! A growable, contiguous sequence container built directly on raw memory.
//!
//! This crate provides [`ContiguousVec`], a from-scratch dynamic array split
//! into two layers: a private raw storage manager that owns one block of
//! uninitialized slots and nothing else, and the container itself, which
//! tracks exactly which slots hold live values and implements growth,
//! positional insertion and removal, and copy/move semantics on top.
//!
//! # Key Features
//!
//! - **Value semantics**: [`Clone`] copies elements; moves transfer the block
//!   in O(1) without touching a single element
//! - **Amortized O(1) appends**: doubling growth, starting 0 → 1
//! - **Positional operations**: insert and remove anywhere in the sequence
//! - **Contiguous view**: derefs to `[T]`, so the full slice API applies
//! - **Panic safety**: a panicking element `clone` or `default` never leaks
//!   an element and never drops one twice; reallocating paths leave the
//!   container exactly as it was
//! - **No element-type requirements for relocation**: migration between
//!   blocks is bitwise and never invokes `Clone`
//!
//! # Examples
//!
//! Building and editing a sequence:
//!
//! ```rust
//! use contiguous_vec::ContiguousVec;
//!
//! let mut vec = ContiguousVec::new();
//!
//! for value in 0..5 {
//!     vec.push(value);
//! }
//!
//! vec.insert(2, 99);
//! assert_eq!(vec.as_slice(), &[0, 1, 99, 2, 3, 4]);
//!
//! assert_eq!(vec.remove(2), 99);
//! assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
//! ```
//!
//! Capacity is always explicit and exact where you control it:
//!
//! ```rust
//! use contiguous_vec::ContiguousVec;
//!
//! let mut vec = ContiguousVec::<String>::new();
//! vec.reserve(100);
//!
//! assert_eq!(vec.capacity(), 100);
//! assert_eq!(vec.len(), 0);
//! ```
//!
//! # Contract violations versus element failures
//!
//! Caller bugs - indexing out of bounds, popping from an empty container,
//! inserting past the end - are contract violations and panic immediately
//! with a message naming the operation and the container state. Failures
//! raised by the element type itself (a panicking `clone()` or `default()`)
//! unwind through the container with documented guarantees; see the
//! [`ContiguousVec`] type documentation.
//!
//! # Limitations
//!
//! Zero-sized element types are not supported; the first operation that
//! needs an allocation panics. Concurrent access requires external
//! synchronization, exactly as for `Vec<T>`.

mod buffer;
mod vec;

pub(crate) use buffer::*;
pub use vec::ContiguousVec;
