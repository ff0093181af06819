// Domain layer: course models and ports. No network or terminal code here.

pub mod model;
pub mod ports;
