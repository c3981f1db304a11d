// Domain layer: core models, the country directory, and ports (interfaces).

pub mod countries;
pub mod model;
pub mod ports;
