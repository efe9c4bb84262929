// Domain layer: models, the currency table and ports. No I/O here.

pub mod currency;
pub mod model;
pub mod ports;
