/// Domain layer - OVAL data model and the pure resolution services
///
/// Nothing in this module performs I/O; it works on an already parsed
/// `roxmltree::Document`.
pub mod domain;
pub mod services;
