//! Command implementations

mod check;
mod config_cmd;
mod resolve;
mod session;

pub use check::check;
pub use config_cmd::config_cmd;
pub use resolve::resolve;
pub use session::session;
