pub(crate) mod ease;
pub(crate) mod kind;
pub(crate) mod models;
pub(crate) mod params;
pub(crate) mod playback;
pub(crate) mod registry;
pub(crate) mod sampler;
