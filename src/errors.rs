use std::collections::TryReserveError;

use thiserror::Error;
#[derive(Debug, Error)]
pub enum SkipListError {
    #[error("There is not enough memory available: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("Node arena is full, limit is {limit} nodes")]
    ArenaFull { limit: usize },
    #[error("Invalid max_levels {max_levels}, must be in range [1,{cap}]")]
    InvalidMaxLevels { max_levels: usize, cap: usize },
    #[error("List does not exists")]
    MissingList,
}
impl SkipListError {
    /// True for both ways a node allocation can be refused.
    pub fn is_alloc_failure(&self) -> bool {
        matches!(
            self,
            SkipListError::OutOfMemory(_) | SkipListError::ArenaFull { .. }
        )
    }
}
