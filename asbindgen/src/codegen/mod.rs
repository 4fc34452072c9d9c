//! C++ spelling of everything the generator emits

pub(crate) mod flags;
pub(crate) mod scaffold;
pub(crate) mod statements;
