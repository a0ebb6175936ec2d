pub mod battlefield;
pub mod network;
pub mod not_found;
