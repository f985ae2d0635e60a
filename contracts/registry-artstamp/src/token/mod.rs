mod lifecycle;
mod mint;
mod transfer;
pub mod types;
mod views;
