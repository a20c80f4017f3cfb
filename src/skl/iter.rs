use super::{
    node::{Node, NodeOffset, HEAD_OFFSET},
    SkipList,
};

/// Walks the chain of a single level, head excluded.
pub(crate) struct LevelIter<'a> {
    skip_list: &'a SkipList,
    level: usize,
    cursor: Option<NodeOffset>,
}
impl<'a> LevelIter<'a> {
    pub(crate) fn new(skip_list: &'a SkipList, level: usize) -> Self {
        Self {
            skip_list,
            level,
            cursor: skip_list.arena.next(HEAD_OFFSET, level),
        }
    }
}
impl<'a> Iterator for LevelIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.skip_list.arena.get(self.cursor?)?;
        self.cursor = node.next(self.level);
        Some(node)
    }
}

/// Ordered `(key, value)` pairs along level 0.
pub struct SkipListIter<'a> {
    inner: LevelIter<'a>,
    remaining: usize,
}
impl<'a> SkipListIter<'a> {
    pub(crate) fn new(skip_list: &'a SkipList) -> Self {
        Self {
            inner: LevelIter::new(skip_list, 0),
            remaining: skip_list.len(),
        }
    }
}
impl<'a> Iterator for SkipListIter<'a> {
    type Item = (i32, char);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key, node.value))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<'a> ExactSizeIterator for SkipListIter<'a> {}

#[cfg(test)]
mod tests {
    use crate::{config::Config, skl::SkipList};

    #[test]
    fn test_iteration_order() {
        let mut skip_list = SkipList::with_config(Config::default().set_seed(5)).unwrap();
        let keys = vec![5, 2, 8, 1, 9, 3, 7, 4, 6];
        for &k in &keys {
            skip_list.insert(k, (b'0' + k as u8) as char).unwrap();
        }
        let mut iter = skip_list.iter();
        assert_eq!(iter.len(), keys.len());
        assert_eq!(iter.next(), Some((1, '1')));
        assert_eq!(iter.len(), keys.len() - 1);

        let iter_keys: Vec<_> = skip_list.keys().collect();
        let mut sorted_keys = keys.clone();
        sorted_keys.sort();
        assert_eq!(iter_keys, sorted_keys);
        assert_eq!((&skip_list).into_iter().count(), keys.len());
    }
    #[test]
    fn test_level_iter() {
        let mut skip_list = SkipList::new(3).unwrap();
        skip_list.insert_with_height(1, 'a', 3).unwrap();
        skip_list.insert_with_height(2, 'b', 1).unwrap();
        skip_list.insert_with_height(3, 'c', 2).unwrap();
        let level = |l| skip_list.level_iter(l).map(|n| n.key).collect::<Vec<_>>();
        assert_eq!(level(0), vec![1, 2, 3]);
        assert_eq!(level(1), vec![1, 3]);
        assert_eq!(level(2), vec![1]);
        assert!(skip_list.level_iter(2).all(|n| !n.is_head()));
    }
}
