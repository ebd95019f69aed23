// Domain layer: employee models and the ports the exporters and adapters plug into.

pub mod model;
pub mod ports;
