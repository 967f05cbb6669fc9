pub mod aes;
pub mod ctr;

pub use aes::Aes256;
