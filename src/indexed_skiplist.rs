//! An always-ordered, duplicate-free skiplist with order-statistics queries.

use std::{
    borrow::Borrow,
    cmp::{self, Ordering},
    fmt, iter,
};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    level_generator::{LevelGenerator, TrailingOnes},
    skipnode::{HEAD, Iter, NodeId, SkipNode},
};

/// Number of levels of the head node, and hence the maximum height of any
/// node in the list.
pub const MAX_LEVELS: usize = 32;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when inserting into an [`IndexedSkipList`].
#[non_exhaustive]
pub enum InsertError {
    /// An equal value is already stored in the list.
    #[error("value is already present in the skiplist.")]
    DuplicateValue,
}

// ////////////////////////////////////////////////////////////////////////////
// IndexedSkipList
// ////////////////////////////////////////////////////////////////////////////

/// The indexed skiplist stores distinct elements such that they are always
/// sorted, and provides efficient ways to insert, find and remove them, to
/// find the rank of an element and to find the element with a given rank.
///
/// Ranks are 1-based: the smallest element has rank 1 and the largest has rank
/// [`len`][IndexedSkipList::len].
///
/// The height of each new node is chosen by a [`LevelGenerator`], which
/// defaults to [`TrailingOnes`].  A node is never more than one level taller
/// than the tallest node already in the list, so the list grows at most one
/// level per insertion.
///
/// Insertion and removal take `&mut self`, while all queries take `&self`; to
/// share a list between threads wrap it in a lock such as
/// [`RwLock`][std::sync::RwLock].
pub struct IndexedSkipList<T, G = TrailingOnes> {
    // Arena of nodes; `nodes[HEAD]` is the head and always present.
    nodes: Vec<SkipNode<T>>,
    // Vacated slots of `nodes`, reused before the arena grows.
    free: Vec<NodeId>,
    len: usize,
    // Number of levels holding at least one node.
    height: usize,
    level_generator: G,
}

/// The rightmost node before some value on every level, together with the
/// position of that node (the head being at position 0).
struct Path {
    nodes: [NodeId; MAX_LEVELS],
    positions: [usize; MAX_LEVELS],
}

/// Where a stored value was found.
#[derive(Clone, Copy)]
struct Found {
    node: NodeId,
    rank: usize,
    left_count: usize,
}

fn compare<T, Q>(value: &T, target: &Q) -> Ordering
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    Ord::cmp(Borrow::<Q>::borrow(value), target)
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<T> IndexedSkipList<T> {
    /// Create a new skiplist whose level generator is seeded from the thread
    /// random number generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let skiplist: IndexedSkipList<i64> = IndexedSkipList::new();
    /// assert!(skiplist.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_level_generator(TrailingOnes::new(MAX_LEVELS))
    }

    /// Create a new skiplist whose level generator is seeded with `seed`.  Two
    /// lists created with the same seed and receiving the same operations
    /// have identical shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut a = IndexedSkipList::with_seed(7);
    /// let mut b = IndexedSkipList::with_seed(7);
    /// for i in 0..100 {
    ///     a.insert(i)?;
    ///     b.insert(i)?;
    /// }
    /// assert!(a.profile().heights().eq(b.profile().heights()));
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_level_generator(TrailingOnes::with_seed(MAX_LEVELS, seed))
    }
}

impl<T, G> IndexedSkipList<T, G>
where
    G: LevelGenerator,
{
    /// Create a new skiplist drawing node heights from `level_generator`.
    /// Levels are truncated to [`MAX_LEVELS`] regardless of what the generator
    /// reports as its total.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::{IndexedSkipList, level_generator::Geometric};
    ///
    /// let generator = Geometric::new(16, 0.25)?;
    /// let mut skiplist = IndexedSkipList::with_level_generator(generator);
    /// skiplist.insert("a")?;
    /// assert_eq!(skiplist.len(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_level_generator(level_generator: G) -> Self {
        IndexedSkipList {
            nodes: vec![SkipNode::head(MAX_LEVELS)],
            free: Vec::new(),
            len: 0,
            height: 0,
            level_generator,
        }
    }
}

impl<T, G> IndexedSkipList<T, G> {
    /// Clears the skiplist, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// skiplist.insert(1)?;
    /// skiplist.clear();
    /// assert!(skiplist.is_empty());
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[HEAD] = SkipNode::head(MAX_LEVELS);
        self.free.clear();
        self.len = 0;
        self.height = 0;
    }

    /// Returns the number of elements in the skiplist.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the skiplist contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels currently holding at least one element.
    /// This is the height of the tallest node, and zero for an empty list.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Provides a reference to the smallest element, or `None` if the
    /// skiplist is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        let first = self.nodes[HEAD].links[0]?;
        self.nodes[first].value.as_ref()
    }

    /// Provides a reference to the largest element, or `None` if the skiplist
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// assert!(skiplist.last().is_none());
    ///
    /// skiplist.insert(2)?;
    /// skiplist.insert(1)?;
    /// assert_eq!(skiplist.first(), Some(&1));
    /// assert_eq!(skiplist.last(), Some(&2));
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.nodes[self.last_node()].value.as_ref()
    }

    /// Provides the element with the given 1-based `rank`, or `None` if `rank`
    /// is zero or greater than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// for i in (10..=100).step_by(10) {
    ///     skiplist.insert(i)?;
    /// }
    /// assert_eq!(skiplist.select_by_rank(5), Some(&50));
    /// assert_eq!(skiplist.select_by_rank(0), None);
    /// assert_eq!(skiplist.select_by_rank(11), None);
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[must_use]
    pub fn select_by_rank(&self, rank: usize) -> Option<&T> {
        if rank == 0 || rank > self.len {
            return None;
        }
        let mut node = HEAD;
        let mut remaining = rank;
        for level in (0..self.height).rev() {
            let (next, travelled) = self.advance_at_level(node, level, remaining);
            node = next;
            remaining -= travelled;
            if remaining == 0 {
                return self.nodes[node].value.as_ref();
            }
        }
        None
    }

    /// Creates an iterator over the elements of the skiplist, in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// for i in [3, 1, 2] {
    ///     skiplist.insert(i)?;
    /// }
    /// assert!(skiplist.iter().eq(&[1, 2, 3]));
    /// assert!(skiplist.iter().rev().eq(&[3, 2, 1]));
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        if self.is_empty() {
            Iter {
                nodes: &self.nodes,
                first: None,
                last: None,
                size: 0,
            }
        } else {
            Iter {
                nodes: &self.nodes,
                first: self.nodes[HEAD].links[0],
                last: Some(self.last_node()),
                size: self.len,
            }
        }
    }

    /// Returns the skyline of the skiplist: the height of the head followed by
    /// the height of every node, in ascending order of the nodes' values.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::{IndexedSkipList, MAX_LEVELS};
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// skiplist.insert(1)?;
    /// // The first node can never be taller than one level.
    /// assert!(skiplist.profile().heights().eq([MAX_LEVELS, 1]));
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[must_use]
    pub fn profile(&self) -> Profile<'_, T> {
        Profile { nodes: &self.nodes }
    }

    /// Recomputes the length of every link from the bottom level.
    ///
    /// Link lengths are maintained by [`insert`][IndexedSkipList::insert] and
    /// [`remove`][IndexedSkipList::remove], so on a list only modified through
    /// its methods this leaves every length unchanged.  It walks the whole
    /// list and costs `O(n)` per level.
    pub fn reindex(&mut self) {
        let mut positions = vec![0; self.nodes.len()];
        let mut len = 0;
        let mut node = HEAD;
        while let Some(next) = self.nodes[node].links[0] {
            len += 1;
            positions[next] = len;
            node = next;
        }
        debug_assert_eq!(len, self.len, "Bottom level disagrees with length.");

        for level in 0..MAX_LEVELS {
            let mut node = HEAD;
            loop {
                let next = self.nodes[node].links[level];
                let end = next.map_or(len, |next| positions[next]);
                self.nodes[node].links_len[level] = end - positions[node];
                match next {
                    Some(next) => node = next,
                    None => break,
                }
            }
        }
        trace!(len, height = self.height, "rebuilt link lengths");
    }
}

impl<T, G> IndexedSkipList<T, G>
where
    T: Ord,
    G: LevelGenerator,
{
    /// Insert the element into the skiplist.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DuplicateValue`] if an equal element is already
    /// present, in which case the skiplist is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::{IndexedSkipList, InsertError};
    ///
    /// let mut skiplist = IndexedSkipList::new();
    ///
    /// skiplist.insert(0)?;
    /// skiplist.insert(5)?;
    /// assert_eq!(skiplist.insert(5), Err(InsertError::DuplicateValue));
    /// assert_eq!(skiplist.len(), 2);
    /// # Ok::<(), InsertError>(())
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), InsertError> {
        let path = self.path_to(&value);
        if self
            .next_if_at_level(path.nodes[0], 0, |next| next == &value)
            .is_some()
        {
            debug!(len = self.len, "rejected duplicate value");
            return Err(InsertError::DuplicateValue);
        }

        let level = cmp::min(
            self.level_generator.level(),
            cmp::min(self.height, MAX_LEVELS - 1),
        );
        if level == self.height {
            self.height += 1;
            trace!(height = self.height, "skiplist grew a level");
        }
        let height = level + 1;
        let position = path.positions[0] + 1;
        let id = self.allocate(SkipNode::new(value, height));

        for level in 0..MAX_LEVELS {
            let prev = path.nodes[level];
            if level < height {
                // Splice the node between `prev` and its successor, splitting
                // the length of the link it replaces.
                let distance = position - path.positions[level];
                let next = self.nodes[prev].links[level];
                let next_len = self.nodes[prev].links_len[level] + 1 - distance;

                let node = &mut self.nodes[id];
                node.links[level] = next;
                node.links_len[level] = next_len;
                node.prev[level] = prev;

                let prev_node = &mut self.nodes[prev];
                prev_node.links[level] = Some(id);
                prev_node.links_len[level] = distance;

                if let Some(next) = next {
                    self.nodes[next].prev[level] = id;
                }
            } else {
                // Already pointing past the new node; fix length.
                self.nodes[prev].links_len[level] += 1;
            }
        }
        self.len += 1;
        Ok(())
    }
}

impl<T, G> IndexedSkipList<T, G>
where
    T: Ord,
{
    /// Returns `true` if the value is contained in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// for i in 0..10 {
    ///     skiplist.insert(i)?;
    /// }
    /// assert!(skiplist.contains(&4));
    /// assert!(!skiplist.contains(&15));
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(value).is_some()
    }

    /// Returns a reference to the stored element equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// skiplist.insert(String::from("apple"))?;
    /// assert_eq!(skiplist.get("apple").map(String::as_str), Some("apple"));
    /// assert!(skiplist.get("pear").is_none());
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[must_use]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = self.locate(value)?;
        self.nodes[found.node].value.as_ref()
    }

    /// Returns the 1-based rank of `value` among the elements of the skiplist,
    /// or `None` if it is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// for i in (10..=100).step_by(10) {
    ///     skiplist.insert(i)?;
    /// }
    /// assert_eq!(skiplist.rank(&50), Some(5));
    /// assert_eq!(skiplist.rank(&45), None);
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(value).map(|found| found.rank)
    }

    /// Returns the number of elements lying strictly between `value` and the
    /// closest smaller element at least as tall as `value`'s node (or the head
    /// if there is none), or `None` if `value` is not present.
    ///
    /// These are the elements that the link into `value`'s node skips over on
    /// its topmost level.
    #[must_use]
    pub fn left_count<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(value).map(|found| found.left_count)
    }

    /// Removes and returns the element equal to `value`, or `None` if there is
    /// no such element in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_skiplist::IndexedSkipList;
    ///
    /// let mut skiplist = IndexedSkipList::new();
    /// for i in 0..10 {
    ///     skiplist.insert(i)?;
    /// }
    /// assert_eq!(skiplist.remove(&4), Some(4));
    /// assert!(skiplist.remove(&4).is_none());
    /// assert_eq!(skiplist.rank(&5), Some(5));
    /// # Ok::<(), indexed_skiplist::InsertError>(())
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let path = self.path_to(value);
        let (target, _) = self.next_if_at_level(path.nodes[0], 0, |next| {
            compare(next, value) == Ordering::Equal
        })?;

        let height = self.nodes[target].height();
        for level in 0..MAX_LEVELS {
            let prev = path.nodes[level];
            if level < height {
                // Bridge over the node, merging both link lengths.
                let next = self.nodes[target].links[level];
                let next_len = self.nodes[target].links_len[level];

                let prev_node = &mut self.nodes[prev];
                prev_node.links[level] = next;
                prev_node.links_len[level] = prev_node.links_len[level] + next_len - 1;

                if let Some(next) = next {
                    self.nodes[next].prev[level] = prev;
                }
            } else {
                // Already pointing past the removed node; fix length.
                self.nodes[prev].links_len[level] -= 1;
            }
        }

        while self.height > 0 && self.nodes[HEAD].links[self.height - 1].is_none() {
            self.height -= 1;
            trace!(height = self.height, "skiplist shrank a level");
        }

        self.len -= 1;
        let value = self.nodes[target].vacate();
        if self.is_empty() {
            self.nodes.truncate(1);
            self.free.clear();
        } else {
            self.free.push(target);
        }
        value
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<T, G> IndexedSkipList<T, G> {
    /// Stores `node` in the arena, reusing a vacated slot if there is one.
    fn allocate(&mut self, node: SkipNode<T>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id].occupy(node);
            id
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Move to the next node at the given level if the predicate holds for
    /// its value.
    ///
    /// Returns the next node and the length of the link followed.
    fn next_if_at_level(
        &self,
        node: NodeId,
        level: usize,
        predicate: impl FnOnce(&T) -> bool,
    ) -> Option<(NodeId, usize)> {
        let current = &self.nodes[node];
        let next = current.links[level]?;
        let value = self.nodes[next].value.as_ref()?;
        predicate(value).then(|| (next, current.links_len[level]))
    }

    /// Keep moving at the specified level as long as the predicate holds for
    /// the next node's value.
    ///
    /// Returns the last node reached and the distance travelled.
    fn advance_while_at_level(
        &self,
        node: NodeId,
        level: usize,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> (NodeId, usize) {
        let mut current = node;
        let mut travelled = 0;
        while let Some((next, steps)) = self.next_if_at_level(current, level, &mut predicate) {
            current = next;
            travelled += steps;
        }
        (current, travelled)
    }

    /// Try to move for the given distance, only using links at the specified
    /// level.  If it's impossible, then move as far as possible.
    ///
    /// Returns the node reached and the distance travelled.
    fn advance_at_level(
        &self,
        node: NodeId,
        level: usize,
        mut max_distance: usize,
    ) -> (NodeId, usize) {
        let mut current = node;
        let mut travelled = 0;
        while let Some(next) = self.nodes[current].links[level] {
            let steps = self.nodes[current].links_len[level];
            if steps > max_distance {
                break;
            }
            max_distance -= steps;
            travelled += steps;
            current = next;
        }
        (current, travelled)
    }

    /// Move to the last node of the list, or the head if it is empty.
    fn last_node(&self) -> NodeId {
        (0..self.height).rev().fold(HEAD, |node, level| {
            self.advance_while_at_level(node, level, |_| true).0
        })
    }

    /// Finds the rightmost node strictly smaller than `value` on every level.
    /// Levels above the current height are filled with the head.
    fn path_to<Q>(&self, value: &Q) -> Path
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut path = Path {
            nodes: [HEAD; MAX_LEVELS],
            positions: [0; MAX_LEVELS],
        };
        let mut node = HEAD;
        let mut position = 0;
        for level in (0..self.height).rev() {
            let (next, travelled) = self.advance_while_at_level(node, level, |next| {
                compare(next, value) == Ordering::Less
            });
            node = next;
            position += travelled;
            path.nodes[level] = node;
            path.positions[level] = position;
        }
        path
    }

    /// Searches for `value` from the top level down, stopping on the first
    /// level where it is found.  That level is the top of the node's tower.
    fn locate<Q>(&self, value: &Q) -> Option<Found>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = HEAD;
        let mut position = 0;
        for level in (0..self.height).rev() {
            let (next, travelled) = self.advance_while_at_level(node, level, |next| {
                compare(next, value) == Ordering::Less
            });
            node = next;
            position += travelled;
            if let Some((found, steps)) = self.next_if_at_level(node, level, |next| {
                compare(next, value) == Ordering::Equal
            }) {
                return Some(Found {
                    node: found,
                    rank: position + steps,
                    left_count: steps - 1,
                });
            }
        }
        None
    }
}

#[cfg(test)]
impl<T, G> IndexedSkipList<T, G>
where
    T: Ord + fmt::Debug,
{
    /// Checks the integrity of the skiplist, panicking on the first broken
    /// invariant.
    fn check(&self) {
        assert!(self.height <= MAX_LEVELS);
        let head = &self.nodes[HEAD];
        assert!(head.value.is_none(), "The head must not hold a value.");
        assert_eq!(head.height(), MAX_LEVELS);
        for level in 0..MAX_LEVELS {
            assert_eq!(
                head.links[level].is_some(),
                level < self.height,
                "Level {level} occupancy disagrees with height {}",
                self.height
            );
        }

        // Positions along the bottom level.
        let mut positions = vec![None; self.nodes.len()];
        positions[HEAD] = Some(0);
        let mut len = 0;
        let mut node = HEAD;
        while let Some(next) = self.nodes[node].links[0] {
            len += 1;
            positions[next] = Some(len);
            node = next;
        }
        assert_eq!(len, self.len, "Bottom level disagrees with length");

        for level in 0..MAX_LEVELS {
            let mut node = HEAD;
            let mut on_level = 0;
            loop {
                let current = &self.nodes[node];
                assert!(
                    current.height() > level,
                    "Node {node} is linked on level {level} beyond its tower"
                );
                let Some(position) = positions[node] else {
                    panic!("Node {node} is on level {level} but not on level 0");
                };
                let next = current.links[level];
                let end = match next {
                    Some(next) => {
                        let Some(end) = positions[next] else {
                            panic!("Node {next} is on level {level} but not on level 0");
                        };
                        assert_eq!(self.nodes[next].prev[level], node, "Broken back link");
                        assert!(
                            current.value.as_ref() < self.nodes[next].value.as_ref(),
                            "Level {level} out of order: {:?} then {:?}",
                            current.value,
                            self.nodes[next].value
                        );
                        end
                    }
                    None => len,
                };
                assert_eq!(
                    current.links_len[level],
                    end - position,
                    "Wrong length for node {node} on level {level}"
                );
                match next {
                    Some(next) => {
                        on_level += 1;
                        node = next;
                    }
                    None => break,
                }
            }
            // Every node tall enough must be reachable on this level.
            let tall_enough = positions
                .iter()
                .enumerate()
                .filter(|&(id, position)| {
                    id != HEAD && position.is_some() && self.nodes[id].height() > level
                })
                .count();
            assert_eq!(on_level, tall_enough, "Tower broken on level {level}");
        }

        let vacant = self.nodes.iter().filter(|node| node.is_vacant()).count();
        assert_eq!(vacant, self.free.len());
        assert_eq!(self.nodes.len(), 1 + self.len + self.free.len());
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T> Default for IndexedSkipList<T> {
    #[inline]
    fn default() -> IndexedSkipList<T> {
        IndexedSkipList::new()
    }
}

impl<'a, T, G> iter::IntoIterator for &'a IndexedSkipList<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, G> fmt::Debug for IndexedSkipList<T, G>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Prints the elements in ascending order, separated by single spaces.
impl<T, G> fmt::Display for IndexedSkipList<T, G>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut node = self.nodes[HEAD].links[0];
        let mut separator = "";
        while let Some(id) = node {
            let current = &self.nodes[id];
            write!(f, "{separator}{current}")?;
            separator = " ";
            node = current.links[0];
        }
        Ok(())
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Profile
// ////////////////////////////////////////////////////////////////////////////

/// The skyline of an [`IndexedSkipList`], as returned by
/// [`IndexedSkipList::profile`].
///
/// When displayed, each node (starting with the head) is printed on its own
/// line as a row of `*`, one per level.
pub struct Profile<'a, T> {
    nodes: &'a [SkipNode<T>],
}

impl<'a, T> Profile<'a, T> {
    /// The height of the head followed by the height of every node, in
    /// ascending order of the nodes' values.
    pub fn heights(self) -> impl Iterator<Item = usize> + 'a {
        let nodes = self.nodes;
        iter::successors(Some(HEAD), move |&id| nodes[id].links[0]).map(move |id| nodes[id].height())
    }
}

impl<T> Clone for Profile<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Profile<'_, T> {}

impl<T> fmt::Display for Profile<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for height in self.heights() {
            writeln!(f, "{}", "*".repeat(height))?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Profile<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.heights()).finish()
    }
}
