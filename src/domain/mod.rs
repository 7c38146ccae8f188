// Domain layer: property model, its shape contract, and the ports the service depends on.

pub mod model;
pub mod ports;
pub mod schema;
