pub mod address;
pub mod submissions;
