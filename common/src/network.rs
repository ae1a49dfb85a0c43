pub mod gateway;
pub mod probe;
pub mod route;
