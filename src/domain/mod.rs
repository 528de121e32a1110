// Domain layer: account records, the example document shape, and the account source port.

pub mod model;
pub mod ports;
