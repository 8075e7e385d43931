pub(crate) mod mode;
pub(crate) mod overlays;
pub(crate) mod session;
pub(crate) mod ui;
