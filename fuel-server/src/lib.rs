//! Fuel station server.
//!
//! A small JSON API over an in-memory collection of fuel stations, persisted
//! to a JSON file after every change, with a map-based web page on top.

pub mod config;
pub mod domain;
pub mod store;
pub mod telemetry;
pub mod web;
