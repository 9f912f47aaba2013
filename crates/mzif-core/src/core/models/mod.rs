//! # Core Models Module
//!
//! - [`ids`] - the 4-character structure identifier
//! - [`block`] - square numeric blocks in compressed sparse row form
//! - [`builder`] - accumulation of numeric rows into the three blocks of a model
//! - [`model`] - one scored model
//! - [`dataset`] - raw and split datasets

pub mod block;
pub mod builder;
pub mod dataset;
pub mod ids;
pub mod model;
