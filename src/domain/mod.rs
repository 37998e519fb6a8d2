// Domain layer: the nested container model and the summation port.

pub mod model;
pub mod ports;
