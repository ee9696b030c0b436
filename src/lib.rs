//! A dynamic positional range-minimum list for Rust.
//!
//! This crate provides [`RmqList`], an ordered sequence of values with
//! O(log n) insertion at any position, O(log n) in-place update, and
//! O(log n) minimum queries over any half-open position interval:
//!
//! - [`insert`](RmqList::insert) - Insert at a position, shifting later
//!   elements right
//! - [`update`](RmqList::update) - Replace the value at a position
//! - [`get`](RmqList::get) / indexing by position - Point access
//! - [`range_min`](RmqList::range_min) - Minimum over `[lo, hi)`
//!
//! Unlike a static range-minimum structure (sparse table, Cartesian tree),
//! positions are not fixed: inserting shifts every subsequent element's
//! position by one, and queries always see the current sequence. Unlike a
//! plain order-statistics tree, every subtree caches its minimum, so range
//! queries prune fully covered subtrees in O(1).
//!
//! # Example
//!
//! ```
//! use rmq_tree::RmqList;
//!
//! let mut depths: RmqList<u32, i64> = RmqList::new();
//! depths.push(3);
//! depths.push(1);
//! depths.push(4);
//!
//! // Make room at the front; everything shifts right.
//! depths.insert(0, 2);
//! assert_eq!(depths.to_vec(), [2, 3, 1, 4]);
//!
//! // Minimum over positions [1, 3).
//! assert_eq!(depths.range_min(1, 3), 1);
//!
//! // Replace in place; cached minima follow.
//! depths.update(2, 5);
//! assert_eq!(depths.range_min(0, 4), 2);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library
//!   dependency
//! - **O(log n) point and range operations** - A self-balancing tree keyed
//!   by position rank, augmented with cached subtree minima
//! - **Pluggable key and value types** - Any primitive unsigned integer as
//!   the position key ([`Key`]), any totally ordered value with a `min`
//!   identity ([`MinValue`])
//!
//! # Implementation
//!
//! The sequence is an AVL tree in which each node stores its 1-based rank
//! within its own subtree (one plus its left-subtree size) instead of a
//! stored key. Descent translates positions additively along right edges,
//! so the rank field simultaneously serves as the search key and the
//! order-statistic size augmentation. Rotations re-derive ranks additively
//! and hand cached minima from the old subtree root to the new one, which
//! keeps every invariant intact without parent pointers.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod key;
mod min_value;
mod raw;

pub mod rmq_list;

pub use key::{Height, Key};
pub use min_value::MinValue;
pub use rmq_list::RmqList;
