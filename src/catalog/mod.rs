/// Catalog domain layer - Pure business logic and domain models
///
/// No I/O happens here: products arrive through the data-source ports and
/// every operation below is a synchronous, deterministic transformation.
pub mod domain;
pub mod services;
