pub(crate) mod arena;
