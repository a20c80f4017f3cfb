use anyhow::bail;
use log::LevelFilter;

use crate::default::{
    DEFAULT_MAX_LEVELS, RANDOM_HEIGHT_DENOMINATOR, RANDOM_HEIGHT_NUMERATOR, SKL_MAX_HEIGHT,
};
use crate::errors::SkipListError;

/// How the level count of a new node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelDistribution {
    /// `1 + uniform(0..max_levels)`
    Uniform,
    ///start at 1 and promote while a `numerator/denominator` coin succeeds.
    ///for example with 1/3, the probability of height==2 is 1/3, height==3 is (1/3)^2
    Geometric { numerator: u32, denominator: u32 },
}
impl Default for LevelDistribution {
    fn default() -> Self {
        LevelDistribution::Uniform
    }
}
impl LevelDistribution {
    pub fn geometric() -> Self {
        LevelDistribution::Geometric {
            numerator: RANDOM_HEIGHT_NUMERATOR,
            denominator: RANDOM_HEIGHT_DENOMINATOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    max_levels: usize,
    // None seeds from entropy
    seed: Option<u64>,
    distribution: LevelDistribution,
    // max number of data nodes, the head is not counted
    node_limit: Option<usize>,
    log_level: LevelFilter,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            max_levels: DEFAULT_MAX_LEVELS,
            seed: None,
            distribution: Default::default(),
            node_limit: None,
            log_level: LevelFilter::Info,
        }
    }
}
impl Config {
    pub fn set_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed.into();
        self
    }
    pub fn set_distribution(mut self, distribution: LevelDistribution) -> Self {
        self.distribution = distribution;
        self
    }
    pub fn set_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit.into();
        self
    }
    pub fn set_log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }
}
impl Config {
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn distribution(&self) -> LevelDistribution {
        self.distribution
    }
    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
impl Config {
    pub(crate) fn check_set_config(&mut self) -> anyhow::Result<()> {
        if self.max_levels == 0 || self.max_levels > SKL_MAX_HEIGHT {
            bail!(SkipListError::InvalidMaxLevels {
                max_levels: self.max_levels,
                cap: SKL_MAX_HEIGHT,
            });
        }
        if let LevelDistribution::Geometric {
            numerator,
            denominator,
        } = self.distribution
        {
            if denominator == 0 || numerator >= denominator {
                bail!(
                    "Invalid geometric ratio {}/{}, must be in range (0,1)",
                    numerator,
                    denominator
                );
            }
        }
        log::set_max_level(self.log_level);
        Ok(())
    }
}
