//! Delivery of command results back to Discord.
//!
//! Command logic produces platform-neutral `Reply` values; this module renders them and
//! owns the logging for send failures.

pub mod util;
