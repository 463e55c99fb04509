//! Solvio - Conversational Decision Assistant
//!
//! A user describes a problem, the coach asks clarifying questions, proposes
//! options, weighs the pros and cons of each and recommends one. Finished
//! decisions are kept as browsable history, and a separate feed serves
//! short decision-making tips.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
