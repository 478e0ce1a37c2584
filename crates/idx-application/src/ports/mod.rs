//! Application ports
//!
//! The registry contract builders and consumers register through.

pub mod registry;
