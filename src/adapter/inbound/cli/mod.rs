//! CLI module graph.
//!
//! [`run::run`] turns parsed arguments into a session against the configured
//! backend and hands the command to [`run::dispatch`], which is generic over
//! the backend port so handlers can run against any implementation.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod orders;
pub mod output;
pub mod products;
pub mod run;
pub mod session;
pub mod stock_out;
pub mod vendors;
