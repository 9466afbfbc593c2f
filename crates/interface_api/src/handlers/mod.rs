//! Request handlers, one module per resource

pub mod activities;
pub mod customers;
pub mod health;
pub mod owners;
