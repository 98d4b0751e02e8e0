pub(crate) mod composite;
pub(crate) mod layers;
pub(crate) mod stroke;
pub(crate) mod surface;
