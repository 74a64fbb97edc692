pub mod auth;
pub mod csrf;
pub mod errors;
pub mod jwt;
