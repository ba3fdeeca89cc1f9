//! Execution control: process launch and bounded output collection.

pub mod output;
pub mod runner;
