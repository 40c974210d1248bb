//! Command handlers for the `vigia` binary.

pub mod history;
pub mod run;
pub mod sources;
