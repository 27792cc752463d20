//! Command-line front end for the `gwalk` demonstration binary.

pub mod commands;
