pub(crate) mod enums;
pub(crate) mod functions;
pub(crate) mod structs;
