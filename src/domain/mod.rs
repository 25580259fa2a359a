// Domain layer: data model and the port the service adapters implement.

pub mod model;
pub mod ports;

#[cfg(test)]
pub(crate) mod fixtures;
