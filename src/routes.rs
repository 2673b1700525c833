pub mod cors;
pub mod router;
