//! An indexed skiplist: a sorted, duplicate-free collection supporting
//! insertion, lookup, and removal in `O(log(n))` on average, together with the
//! two order-statistics queries "what is the rank of this value" and "what
//! value has this rank", also in `O(log(n))`.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where we each node `[x]` has references to nodes further down the list,
//! allowing the algorithm to effectively skip ahead.
//!
//! Every link additionally records how many nodes of the bottom level it
//! spans.  Summing those lengths along a search path gives the rank of the
//! node the search ends on, which is what makes [`IndexedSkipList::rank`] and
//! [`IndexedSkipList::select_by_rank`] logarithmic.  The lengths are kept up
//! to date by every insertion and removal.
//!
//! ```
//! use indexed_skiplist::IndexedSkipList;
//!
//! let mut skiplist = IndexedSkipList::with_seed(0);
//! for value in [30, 10, 20] {
//!     skiplist.insert(value)?;
//! }
//! assert_eq!(skiplist.rank(&20), Some(2));
//! assert_eq!(skiplist.select_by_rank(3), Some(&30));
//! assert_eq!(skiplist.to_string(), "10 20 30");
//! # Ok::<(), indexed_skiplist::InsertError>(())
//! ```

mod indexed_skiplist;
pub mod level_generator;
mod skipnode;

pub use indexed_skiplist::{IndexedSkipList, InsertError, MAX_LEVELS, Profile};
pub use skipnode::Iter;
