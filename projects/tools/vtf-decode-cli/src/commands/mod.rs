pub mod export;
pub mod info;
