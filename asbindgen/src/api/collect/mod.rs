pub(crate) mod destination;
