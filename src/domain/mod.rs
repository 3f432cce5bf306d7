// Domain layer: value model and ports (host store and engine contracts).

pub mod model;
pub mod ports;
