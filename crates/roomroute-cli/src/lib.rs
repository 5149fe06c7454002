//! Roomroute CLI library.
//!
//! This crate provides output formatting for the roomroute binary.

pub mod output;
