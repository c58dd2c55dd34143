//! Models shared between the expansion core and the command line front end.

pub mod config;
pub mod network;
