//! Chart Supplements - Aeronautical chart supplement lookups
//!
//! This crate resolves the active publication cycle on the chart supplement
//! search portal and parses the portal's results table into typed records,
//! one listing per airport identifier.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::{ChartSupplements, IcaoQuery, ListResponse, LookupError};
pub use domain::supplement::{
    Cycle, CycleLabel, DocumentLink, EffectiveDateRange, LookupOptions, SupplementListing,
    SupplementRecord,
};
