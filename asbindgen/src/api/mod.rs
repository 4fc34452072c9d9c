pub(crate) mod blacklist;
pub(crate) mod catalog;
pub(crate) mod collect;
pub(crate) mod emit;
pub(crate) mod generator;
pub(crate) mod map;
pub(crate) mod source;
