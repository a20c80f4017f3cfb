mod display;
pub(crate) mod height;
pub mod iter;
pub(crate) mod node;
pub mod skip_list;

pub use iter::SkipListIter;
pub use skip_list::SkipList;
