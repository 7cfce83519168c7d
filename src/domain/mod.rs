// Domain layer: card data model, pure layout/link services, and ports
// (interfaces). No dependencies beyond std/serde.

pub mod model;
pub mod ports;
pub mod services;
