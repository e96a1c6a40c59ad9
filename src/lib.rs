//! Pathfinder - Career Guidance Session Core
//!
//! This crate implements the client-session core of the Pathfinder
//! career-guidance application: profile persistence, view navigation,
//! schedule management, and the AI mentor bridge.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
