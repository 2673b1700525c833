pub mod health;
pub mod prepare;
pub mod seed;
pub mod startup;
pub mod templates;
