// Domain layer: zodiac types, reading models and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod zodiac;
