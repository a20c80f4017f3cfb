use log::trace;

use crate::{
    errors::SkipListError,
    skl::node::{Node, NodeOffset, HEAD_OFFSET},
};

///Slab of nodes addressed by `NodeOffset`.
///The head always lives at offset 0 and is never freed.
///Freed slots are reused before the slab grows, and dropping a slot drops
///the node together with its tower.
#[derive(Debug)]
pub(crate) struct Arena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeOffset>,
    len: usize,
    limit: Option<usize>,
}
impl Arena {
    pub(crate) fn new(head: Node, limit: Option<usize>) -> Result<Self, SkipListError> {
        let mut slots = Vec::new();
        slots.try_reserve(1)?;
        slots.push(Some(head));
        Ok(Self {
            slots,
            free: Vec::new(),
            len: 0,
            limit,
        })
    }
    pub(crate) fn alloc(&mut self, node: Node) -> Result<NodeOffset, SkipListError> {
        if let Some(limit) = self.limit {
            if self.len >= limit {
                return Err(SkipListError::ArenaFull { limit });
            }
        }
        let offset = match self.free.pop() {
            Some(offset) => {
                let index: usize = offset.into();
                self.slots[index] = Some(node);
                offset
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Some(node));
                NodeOffset::from(self.slots.len() - 1)
            }
        };
        self.len += 1;
        trace!("arena alloc {:?}, live nodes {}", offset, self.len);
        Ok(offset)
    }
    /// Releases the node at `offset`, returning it. The head cannot be freed.
    pub(crate) fn free(&mut self, offset: NodeOffset) -> Option<Node> {
        if offset == HEAD_OFFSET {
            return None;
        }
        let index: usize = offset.into();
        let node = self.slots.get_mut(index)?.take()?;
        if self.free.try_reserve(1).is_ok() {
            self.free.push(offset);
        }
        self.len -= 1;
        trace!("arena free {:?}, live nodes {}", offset, self.len);
        Some(node)
    }
    #[inline]
    pub(crate) fn get(&self, offset: NodeOffset) -> Option<&Node> {
        let index: usize = offset.into();
        self.slots.get(index)?.as_ref()
    }
    #[inline]
    pub(crate) fn get_mut(&mut self, offset: NodeOffset) -> Option<&mut Node> {
        let index: usize = offset.into();
        self.slots.get_mut(index)?.as_mut()
    }
    #[inline]
    pub(crate) fn head_mut(&mut self) -> Option<&mut Node> {
        self.get_mut(HEAD_OFFSET)
    }
    /// Successor of `offset` at `level`.
    #[inline]
    pub(crate) fn next(&self, offset: NodeOffset, level: usize) -> Option<NodeOffset> {
        self.get(offset)?.next(level)
    }
    pub(crate) fn set_next(&mut self, offset: NodeOffset, level: usize, next: Option<NodeOffset>) {
        if let Some(node) = self.get_mut(offset) {
            if let Some(p) = node.tower.get_mut(level) {
                *p = next;
            }
        }
    }
    /// Number of live nodes, head excluded.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
    /// Number of slots the slab holds, head and free slots included.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
    /// Drops every slot but the head.
    pub(crate) fn truncate(&mut self) {
        self.slots.truncate(1);
        self.free.clear();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(limit: Option<usize>) -> Arena {
        Arena::new(Node::new_head(4).unwrap(), limit).unwrap()
    }
    #[test]
    fn test_alloc_get() {
        let mut arena = arena(None);
        assert_eq!(arena.len(), 0);
        assert!(arena.get(HEAD_OFFSET).unwrap().is_head());
        let a = arena.alloc(Node::new(1, 'A', 1).unwrap()).unwrap();
        let b = arena.alloc(Node::new(2, 'B', 2).unwrap()).unwrap();
        assert_ne!(a, HEAD_OFFSET);
        assert_ne!(a, b);
        assert_eq!(arena.get(a).unwrap().key, 1);
        assert_eq!(arena.get(b).unwrap().value, 'B');
        assert_eq!(arena.len(), 2);
    }
    #[test]
    fn test_free_reuse() {
        let mut arena = arena(None);
        let a = arena.alloc(Node::new(1, 'A', 1).unwrap()).unwrap();
        let _b = arena.alloc(Node::new(2, 'B', 1).unwrap()).unwrap();
        let capacity = arena.capacity();
        let node = arena.free(a).unwrap();
        assert_eq!(node.key, 1);
        assert!(arena.get(a).is_none());
        assert!(arena.free(a).is_none());
        assert_eq!(arena.len(), 1);
        let c = arena.alloc(Node::new(3, 'C', 1).unwrap()).unwrap();
        assert_eq!(c, a);
        assert_eq!(arena.capacity(), capacity);
    }
    #[test]
    fn test_head_not_freed() {
        let mut arena = arena(None);
        assert!(arena.free(HEAD_OFFSET).is_none());
        assert!(arena.get(HEAD_OFFSET).is_some());
    }
    #[test]
    fn test_limit() {
        let mut arena = arena(Some(2));
        arena.alloc(Node::new(1, 'A', 1).unwrap()).unwrap();
        let b = arena.alloc(Node::new(2, 'B', 1).unwrap()).unwrap();
        match arena.alloc(Node::new(3, 'C', 1).unwrap()) {
            Err(SkipListError::ArenaFull { limit }) => assert_eq!(limit, 2),
            other => panic!("unexpected {:?}", other),
        }
        arena.free(b);
        assert!(arena.alloc(Node::new(3, 'C', 1).unwrap()).is_ok());
    }
    #[test]
    fn test_next_and_truncate() {
        let mut arena = arena(None);
        let a = arena.alloc(Node::new(1, 'A', 2).unwrap()).unwrap();
        arena.set_next(HEAD_OFFSET, 1, Some(a));
        assert_eq!(arena.next(HEAD_OFFSET, 1), Some(a));
        assert!(arena.next(a, 1).is_none());
        // out of the node's height is ignored
        arena.set_next(a, 5, Some(HEAD_OFFSET));
        assert!(arena.next(a, 5).is_none());
        arena.truncate();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 1);
        assert!(arena.get(a).is_none());
    }
}
