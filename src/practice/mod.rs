pub(crate) mod character;
pub(crate) mod controller;
pub(crate) mod events;
pub(crate) mod tracker;
