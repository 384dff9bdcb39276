// Domain layer: curriculum entities and ports (interfaces).

pub mod model;
pub mod ports;
