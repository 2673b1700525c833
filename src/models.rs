pub mod health_dto;
pub mod page_dto;
pub mod product_dao;
pub mod status_dto;
pub mod user_dao;
