//! Cycle-safe, pre-order depth-first traversal operations.
//!
//! Each operation is an independent reachability computation: it owns a fresh
//! visited set for the duration of one call, visits a node's own data before
//! descending into its neighbors (neighbors in listed order), and terminates
//! on any finite graph no matter how cyclic. Nothing is shared between calls
//! and the graph is never mutated.
//!
//! # Operations
//!
//! - [`short_words`] / [`print_short_words`]: Report reachable words shorter than a bound
//! - [`longest_word`]: Find the single longest reachable word
//! - [`self_loopers`] / [`print_self_loopers`]: Report reachable vertices that list themselves as a neighbor
//! - [`can_reach`]: Decide whether one airport can reach another
//! - [`unreachable`]: Compute the keys of a map graph a start key cannot reach

mod longest_word;
mod reachability;
mod self_loopers;
mod short_words;
mod unreachable;

pub use longest_word::*;
pub use reachability::*;
pub use self_loopers::*;
pub use short_words::*;
pub use unreachable::*;
