pub mod mysql;
pub mod product_repository;
