pub mod privat;
pub mod privat_dto;
pub mod utils;
