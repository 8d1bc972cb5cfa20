//! Domain layer: entities, value objects and the ports adapters implement.

pub mod entities;
pub mod ports;
pub mod value_objects;
