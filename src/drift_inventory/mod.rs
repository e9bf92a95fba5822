/// Domain layer - Release drift inventory
///
/// Value objects and pure services. Nothing in here performs I/O.
pub mod domain;
pub mod services;
