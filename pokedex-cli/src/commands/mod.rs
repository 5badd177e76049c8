pub(crate) mod catalog;
pub(crate) mod collection;
pub(crate) mod config;
