pub mod config;
pub mod default;
pub mod errors;
pub mod session;
pub mod skl;
mod util;

pub use config::{Config, LevelDistribution};
pub use errors::SkipListError;
pub use session::Session;
pub use skl::{SkipList, SkipListIter};
