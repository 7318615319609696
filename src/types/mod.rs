pub mod direction;
pub mod request;
