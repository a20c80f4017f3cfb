use std::{cmp::Ordering, mem::replace};

use log::{debug, trace, warn};

use crate::{
    config::{Config, LevelDistribution},
    default::SKL_MAX_HEIGHT,
    errors::SkipListError,
    util::arena::Arena,
};

use super::{
    height::HeightGenerator,
    iter::{LevelIter, SkipListIter},
    node::{Node, NodeOffset, HEAD_OFFSET},
};

/// <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
/// <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
/// <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
/// <head> ----------> [2] --------------------------------------------------> [9] ---------->
///
/// Ordered map from `i32` keys to `char` values.
/// The head sentinel owns a pointer at every one of the `max_levels` levels,
/// every other node owns a pointer at each level in `0..height`.
/// Keys are unique: inserting an existing key replaces its value.
#[derive(Debug)]
pub struct SkipList {
    pub(super) arena: Arena,
    pub(super) max_levels: usize,
    height_gen: HeightGenerator,
}
impl SkipList {
    /// Creates an empty list with `max_levels` levels, level counts drawn uniformly.
    pub fn new(max_levels: usize) -> Result<Self, SkipListError> {
        Self::build(max_levels, LevelDistribution::Uniform, None, None)
    }
    pub fn with_config(mut config: Config) -> anyhow::Result<Self> {
        config.check_set_config()?;
        let skip_list = Self::build(
            config.max_levels(),
            config.distribution(),
            config.seed(),
            config.node_limit(),
        )?;
        Ok(skip_list)
    }
    fn build(
        max_levels: usize,
        distribution: LevelDistribution,
        seed: Option<u64>,
        node_limit: Option<usize>,
    ) -> Result<Self, SkipListError> {
        if max_levels == 0 || max_levels > SKL_MAX_HEIGHT {
            return Err(SkipListError::InvalidMaxLevels {
                max_levels,
                cap: SKL_MAX_HEIGHT,
            });
        }
        let head = Node::new_head(max_levels)?;
        let arena = Arena::new(head, node_limit)?;
        debug!(
            "create skip list, max_levels:{} distribution:{:?} seed:{:?}",
            max_levels, distribution, seed
        );
        Ok(Self {
            arena,
            max_levels,
            height_gen: HeightGenerator::new(max_levels, distribution, seed),
        })
    }

    #[inline]
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub(super) fn next_node(&self, offset: NodeOffset, level: usize) -> Option<(NodeOffset, &Node)> {
        let next = self.arena.next(offset, level)?;
        Some((next, self.arena.get(next)?))
    }

    /// Scans from the top level down and stops at the first level whose
    /// successor holds `key`, so a hit may never reach level 0.
    fn find(&self, key: i32) -> Option<&Node> {
        let mut current = HEAD_OFFSET;
        for level in (0..self.max_levels).rev() {
            while let Some((offset, next)) = self.next_node(current, level) {
                match next.key.cmp(&key) {
                    Ordering::Less => current = offset,
                    Ordering::Equal => return next.into(),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }
    /// For every level, the last node whose key is smaller than `key`.
    fn find_splice(&self, key: i32) -> Result<Vec<NodeOffset>, SkipListError> {
        let mut update = Vec::new();
        update.try_reserve_exact(self.max_levels)?;
        update.resize(self.max_levels, HEAD_OFFSET);
        let mut current = HEAD_OFFSET;
        for level in (0..self.max_levels).rev() {
            while let Some((offset, next)) = self.next_node(current, level) {
                if next.key < key {
                    current = offset;
                } else {
                    break;
                }
            }
            update[level] = current;
        }
        Ok(update)
    }

    pub fn search(&self, key: i32) -> Option<char> {
        self.find(key).map(|node| node.value)
    }
    #[inline]
    pub fn contains(&self, key: i32) -> bool {
        self.find(key).is_some()
    }
    /// Number of levels the node holding `key` takes part in.
    pub fn node_height(&self, key: i32) -> Option<usize> {
        self.find(key).map(Node::height)
    }

    /// Inserts `key`, or replaces the value of an existing `key` in place.
    /// Returns the replaced value.
    ///
    /// On error the list is left unchanged.
    pub fn insert(&mut self, key: i32, value: char) -> Result<Option<char>, SkipListError> {
        self.insert_with(key, value, HeightGenerator::random_height)
    }
    fn insert_with<F>(&mut self, key: i32, value: char, height: F) -> Result<Option<char>, SkipListError>
    where
        F: FnOnce(&mut HeightGenerator) -> usize,
    {
        let update = self.find_splice(key)?;
        if let Some(offset) = self.arena.next(update[0], 0) {
            if let Some(node) = self.arena.get_mut(offset) {
                if node.key == key {
                    let old = replace(&mut node.value, value);
                    trace!("key {} already present, value {:?} -> {:?}", key, old, value);
                    return Ok(old.into());
                }
            }
        }

        let height = height(&mut self.height_gen).clamp(1, self.max_levels);
        let mut node = Node::new(key, value, height)?;
        for level in 0..height {
            node.tower[level] = self.arena.next(update[level], level);
        }
        let offset = match self.arena.alloc(node) {
            Ok(offset) => offset,
            Err(e) => {
                warn!("cannot insert key {}: {}", key, e);
                return Err(e);
            }
        };
        for level in 0..height {
            self.arena.set_next(update[level], level, offset.into());
        }
        trace!("insert key {} with height {}", key, height);
        Ok(None)
    }
    #[cfg(test)]
    pub(crate) fn insert_with_height(
        &mut self,
        key: i32,
        value: char,
        height: usize,
    ) -> Result<Option<char>, SkipListError> {
        self.insert_with(key, value, |_| height)
    }

    /// Removes `key` and releases its node. Removing an absent key is a no-op.
    pub fn delete(&mut self, key: i32) -> Option<char> {
        let mut current = HEAD_OFFSET;
        let mut target = None;
        for level in (0..self.max_levels).rev() {
            while let Some((offset, next)) = self.next_node(current, level) {
                match next.key.cmp(&key) {
                    Ordering::Less => current = offset,
                    Ordering::Equal => {
                        let after = next.next(level);
                        self.arena.set_next(current, level, after);
                        target = offset.into();
                        break;
                    }
                    Ordering::Greater => break,
                }
            }
        }
        let node = self.arena.free(target?)?;
        trace!("delete key {} with height {}", key, node.height());
        Some(node.value)
    }

    /// Releases every node, walking level 0 once, and leaves an empty list
    /// with the same `max_levels`. Returns how many nodes were released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut cursor = self.arena.next(HEAD_OFFSET, 0);
        while let Some(offset) = cursor {
            cursor = self.arena.next(offset, 0);
            if self.arena.free(offset).is_some() {
                released += 1;
            }
        }
        if let Some(head) = self.arena.head_mut() {
            head.tower.reset();
        }
        self.arena.truncate();
        debug!("clear skip list, released {} nodes", released);
        released
    }

    pub fn first(&self) -> Option<(i32, char)> {
        self.next_node(HEAD_OFFSET, 0)
            .map(|(_, node)| (node.key, node.value))
    }
    pub fn last(&self) -> Option<(i32, char)> {
        let mut current = HEAD_OFFSET;
        for level in (0..self.max_levels).rev() {
            while let Some((offset, _)) = self.next_node(current, level) {
                current = offset;
            }
        }
        match self.arena.get(current) {
            Some(node) if !node.is_head() => Some((node.key, node.value)),
            _ => None,
        }
    }

    #[inline]
    pub fn iter(&self) -> SkipListIter<'_> {
        SkipListIter::new(self)
    }
    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.iter().map(|(key, _)| key)
    }
    #[inline]
    pub(crate) fn level_iter(&self, level: usize) -> LevelIter<'_> {
        LevelIter::new(self, level)
    }
    /// Keys present at each level, `levels()[0]` being the full ordered key sequence.
    pub fn levels(&self) -> Vec<Vec<i32>> {
        (0..self.max_levels)
            .map(|level| self.level_iter(level).map(|node| node.key).collect())
            .collect()
    }
}
impl<'a> IntoIterator for &'a SkipList {
    type Item = (i32, char);
    type IntoIter = SkipListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
