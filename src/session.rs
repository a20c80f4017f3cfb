use log::{debug, error};

use crate::{config::Config, errors::SkipListError, skl::SkipList};

/// Holds at most one list. Every operation but `create` on an absent list
/// is reported as `SkipListError::MissingList` and changes nothing.
#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    list: Option<SkipList>,
}
impl Session {
    pub fn new(config: Config) -> Self {
        Self { config, list: None }
    }
    /// Creates a list with `max_levels` levels, releasing the current one if any.
    pub fn create(&mut self, max_levels: usize) -> anyhow::Result<()> {
        let config = self.config.clone().set_max_levels(max_levels);
        let list = SkipList::with_config(config)?;
        if let Some(mut old) = self.list.replace(list) {
            debug!("replace existing list, releasing {} nodes", old.clear());
        }
        Ok(())
    }
    /// Releases the list and all of its nodes. Returns how many nodes were released.
    pub fn destroy(&mut self) -> Result<usize, SkipListError> {
        let mut list = self.list.take().ok_or_else(Self::missing)?;
        Ok(list.clear())
    }
    pub fn is_open(&self) -> bool {
        self.list.is_some()
    }
    pub fn list(&self) -> Option<&SkipList> {
        self.list.as_ref()
    }

    pub fn insert(&mut self, key: i32, value: char) -> Result<Option<char>, SkipListError> {
        self.list_mut()?.insert(key, value)
    }
    pub fn search(&self, key: i32) -> Result<Option<char>, SkipListError> {
        Ok(self.list_ref()?.search(key))
    }
    pub fn delete(&mut self, key: i32) -> Result<Option<char>, SkipListError> {
        Ok(self.list_mut()?.delete(key))
    }
    pub fn display(&self) -> Result<String, SkipListError> {
        Ok(self.list_ref()?.to_string())
    }
    pub fn levels(&self) -> Result<Vec<Vec<i32>>, SkipListError> {
        Ok(self.list_ref()?.levels())
    }
    pub fn len(&self) -> Result<usize, SkipListError> {
        Ok(self.list_ref()?.len())
    }
    pub fn clear(&mut self) -> Result<usize, SkipListError> {
        Ok(self.list_mut()?.clear())
    }

    fn missing() -> SkipListError {
        let e = SkipListError::MissingList;
        error!("{}", e);
        e
    }
    fn list_ref(&self) -> Result<&SkipList, SkipListError> {
        self.list.as_ref().ok_or_else(Self::missing)
    }
    fn list_mut(&mut self) -> Result<&mut SkipList, SkipListError> {
        self.list.as_mut().ok_or_else(Self::missing)
    }
}
