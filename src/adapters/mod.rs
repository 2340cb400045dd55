// Adapters layer: concrete implementations of the domain ports (random sources, stores, export).

pub mod export;
pub mod random;
pub mod store;
