pub mod builtin;
pub mod eval;
pub mod job;
pub mod logging;
pub mod parser;
pub mod search;
pub mod session;
pub mod spawn;
pub mod types;
