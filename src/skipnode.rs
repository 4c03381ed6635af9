use std::{fmt, iter::FusedIterator};

/// Index of a node within the arena of an
/// [`IndexedSkipList`][crate::IndexedSkipList].
pub(crate) type NodeId = usize;

/// The head node always occupies the first slot of the arena.
pub(crate) const HEAD: NodeId = 0;

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// SkipNodes make up the IndexedSkipList.  The list owns every node in an
/// arena and nodes refer to each other by their index in that arena, so the
/// links in both directions never form ownership cycles.
///
/// A node has a tower of `height` levels, fixed when the node is created.  At
/// each level `l < height` it holds:
///
/// - `links[l]`, the next node on level `l`, or `None` at the end of the level;
/// - `prev[l]`, the previous node on level `l` (possibly the head);
/// - `links_len[l]`, the number of level-0 steps needed to reach `links[l]`.
///   If there is no next node, this is the distance to the last node of the
///   list instead.
///
/// The lengths are what make rank and select queries logarithmic: the rank of
/// a node is the sum of the lengths of the links followed to reach it.
#[derive(Clone, Debug)]
pub(crate) struct SkipNode<T> {
    // value should never be None, with the exception of the head node and of
    // vacated slots awaiting reuse.
    pub value: Option<T>,
    // Forward links.  This vector *must* be of length `height`.
    pub links: Vec<Option<NodeId>>,
    // The corresponding length of each link
    pub links_len: Vec<usize>,
    // Backward links, mirroring `links`.
    pub prev: Vec<NodeId>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<T> SkipNode<T> {
    /// Create a new head node.
    pub fn head(total_levels: usize) -> Self {
        SkipNode {
            value: None,
            links: vec![None; total_levels],
            links_len: vec![0; total_levels],
            prev: vec![HEAD; total_levels],
        }
    }

    /// Create a new node with the given value spanning `height` levels.
    /// All links default to the end of the list.
    pub fn new(value: T, height: usize) -> Self {
        SkipNode {
            value: Some(value),
            links: vec![None; height],
            links_len: vec![0; height],
            prev: vec![HEAD; height],
        }
    }

    /// Number of levels this node participates in.
    #[inline]
    pub fn height(&self) -> usize {
        self.links.len()
    }

    /// Empties the node, returning the value it contained.  The slot keeps no
    /// links so that a stale index can never be mistaken for a live node.
    pub fn vacate(&mut self) -> Option<T> {
        self.links = Vec::new();
        self.links_len = Vec::new();
        self.prev = Vec::new();
        self.value.take()
    }

    /// Returns `true` if the slot is empty and may be reused.
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.value.is_none() && self.links.is_empty()
    }

    /// Moves `node` into a vacant slot.
    pub fn occupy(&mut self, node: Self) {
        debug_assert!(self.is_vacant(), "Only vacant slots may be reused.");
        *self = node;
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T> fmt::Display for SkipNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref v) = self.value {
            write!(f, "{v}")
        } else {
            Ok(())
        }
    }
}

// /////////////////////////////////
// Iterators
// /////////////////////////////////
// There's no need for a dummy head (that contains no value) in the iterator.
// so the members are named first and last instead of head/end to avoid
// confusion.

/// Iterator over the values of an
/// [`IndexedSkipList`][crate::IndexedSkipList], in ascending order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a [SkipNode<T>],
    pub(crate) first: Option<NodeId>,
    pub(crate) last: Option<NodeId>,
    pub(crate) size: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        let current = self.nodes.get(self.first?)?;
        self.size -= 1;
        if self.size == 0 {
            self.first = None;
            self.last = None;
        } else {
            self.first = current.links.first().copied().flatten();
        }
        current.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        let current = self.nodes.get(self.last?)?;
        self.size -= 1;
        if self.size == 0 {
            self.first = None;
            self.last = None;
        } else {
            self.last = current.prev.first().copied();
        }
        current.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
