//! Server application core modules.
//!
//! This module contains all server-side functionality for the dentiq
//! application: HTTP routing, order workflow orchestration, 3D-attachment
//! storage, carrier tracking, and patient/practitioner management. It provides
//! the complete backend for dental practices placing product orders and
//! following their shipments.

pub mod carrier;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
