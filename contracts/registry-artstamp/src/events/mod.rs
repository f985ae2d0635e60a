mod builder;
pub(crate) mod types;

mod contract;
mod rights;
mod token;

pub use contract::*;
pub use rights::*;
pub use token::*;

pub(crate) const STANDARD: &str = "artstamp";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
pub(crate) const RIGHTS: &str = "RIGHTS_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
