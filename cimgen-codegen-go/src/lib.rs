mod generator;
mod type_mapper;

pub use generator::{CIM_NAMESPACE, GoBackend};
pub use type_mapper::GoTypeMapper;
