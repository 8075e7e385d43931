pub(crate) mod cache;
pub(crate) mod frame;
pub(crate) mod kind;
