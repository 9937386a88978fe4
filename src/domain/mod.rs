// Domain layer: the number list and the ports the readers and storage implement.

pub mod model;
pub mod ports;
