pub(crate) mod barycentric;
pub(crate) mod composer;
pub(crate) mod diff;
pub(crate) mod transform;
