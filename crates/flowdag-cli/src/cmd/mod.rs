//! Command module for the `flowdag` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the pre-read input and parsed arguments and returns
//! `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod check;
