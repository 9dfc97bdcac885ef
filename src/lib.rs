//! Skill Aid backend - membership and content management.
//!
//! This crate implements the public site API, the membership funnel, and the
//! admin back-office for the Skill Aid nonprofit.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
