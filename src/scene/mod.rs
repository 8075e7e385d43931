pub(crate) mod layers;
pub(crate) mod primitive;
pub(crate) mod registry;
