pub(crate) mod annotation;
pub(crate) mod config;
pub(crate) mod drag;
pub(crate) mod model;
