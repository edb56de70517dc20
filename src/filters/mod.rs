pub(crate) mod dreamy;
pub(crate) mod engine;
pub(crate) mod grain;
pub(crate) mod kind;
pub(crate) mod tone;
