// Domain layer: fiscal document vocabulary and the ports the client talks through.

pub mod model;
pub mod ports;
