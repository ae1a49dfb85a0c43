pub mod connectivity;
pub mod routing;
