/// Hard cap on the number of levels a list may be created with.
pub const SKL_MAX_HEIGHT: usize = 32;
pub const DEFAULT_MAX_LEVELS: usize = 5;
pub const DEFAULT_SEED: u64 = 42;

///a probability of `numerator/denominator` for the geometric level distribution.
pub(crate) const RANDOM_HEIGHT_NUMERATOR: u32 = 1;
pub(crate) const RANDOM_HEIGHT_DENOMINATOR: u32 = 2;

pub(crate) const HEAD_KEY: i32 = 0;
pub(crate) const HEAD_VALUE: char = 'H';
