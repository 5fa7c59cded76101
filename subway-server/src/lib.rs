//! Subway network server.
//!
//! Manages stations and lines, and prices itineraries by the extra fee of
//! the lines they travel on.

pub mod config;
pub mod domain;
pub mod fare;
pub mod service;
pub mod store;
pub mod web;
