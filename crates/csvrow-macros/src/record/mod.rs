//! Implementation of the `#[derive(Record)]` macro.
//!
//! This module generates the `Record` and `Field` implementations that let a
//! struct be flattened into CSV rows, either on its own or embedded in
//! another record.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
