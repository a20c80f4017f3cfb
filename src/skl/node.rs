use std::ops::{Deref, DerefMut};

use crate::{
    default::{HEAD_KEY, HEAD_VALUE},
    errors::SkipListError,
};

/// Slot index of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeOffset(usize);
impl From<usize> for NodeOffset {
    fn from(value: usize) -> Self {
        Self(value)
    }
}
impl Into<usize> for NodeOffset {
    fn into(self) -> usize {
        self.0
    }
}
pub(crate) const HEAD_OFFSET: NodeOffset = NodeOffset(0);

/// Forward pointers of a node, one per level it owns.
#[derive(Debug, Default)]
pub(crate) struct Tower(Vec<Option<NodeOffset>>);
impl Deref for Tower {
    type Target = [Option<NodeOffset>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for Tower {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
impl Tower {
    fn with_height(height: usize) -> Result<Self, SkipListError> {
        let mut tower = Vec::new();
        tower.try_reserve_exact(height)?;
        tower.resize(height, None);
        Ok(Self(tower))
    }
    pub(crate) fn reset(&mut self) {
        self.0.iter_mut().for_each(|p| *p = None);
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) value: char,
    pub(crate) tower: Tower,
    is_head: bool,
}
impl Node {
    pub(crate) fn new(key: i32, value: char, height: usize) -> Result<Self, SkipListError> {
        Ok(Self {
            key,
            value,
            tower: Tower::with_height(height)?,
            is_head: false,
        })
    }
    pub(crate) fn new_head(max_levels: usize) -> Result<Self, SkipListError> {
        Ok(Self {
            key: HEAD_KEY,
            value: HEAD_VALUE,
            tower: Tower::with_height(max_levels)?,
            is_head: true,
        })
    }
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.tower.len()
    }
    #[inline]
    pub(crate) fn is_head(&self) -> bool {
        self.is_head
    }
    /// Successor at `level`, `None` at the end of the level or above this node's height.
    #[inline]
    pub(crate) fn next(&self, level: usize) -> Option<NodeOffset> {
        self.tower.get(level).copied().flatten()
    }
}
