// Domain layer: value types and the cruncher port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
