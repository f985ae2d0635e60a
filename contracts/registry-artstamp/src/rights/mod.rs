mod catalog;
mod collaborators;
mod licenses;
mod revenue;
mod royalty;
pub mod types;
mod versions;
mod views;
