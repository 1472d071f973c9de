mod common;
mod dataclass;
mod pydantic;
mod sqlalchemy;
mod type_mapper;

pub use dataclass::DataclassBackend;
pub use pydantic::PydanticBackend;
pub use sqlalchemy::SqlalchemyBackend;
pub use type_mapper::{
    DATACLASS_TYPES, PRIMITIVE_DATA_TYPES, PYDANTIC_TYPES, PythonTypeMapper, SQLALCHEMY_TYPES,
};
