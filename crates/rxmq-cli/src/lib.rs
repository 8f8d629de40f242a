//! Command-line front end for the RXMQ marshalling engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
