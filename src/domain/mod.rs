// Domain layer: vacancy models and the source port. No HTTP or config here.

pub mod model;
pub mod ports;
