// Domain layer: catalog and pricing models plus the ports the core depends on.

pub mod model;
pub mod ports;
