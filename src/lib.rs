//! TOPSIS Rank - Multi-criteria decision ranking
//!
//! This crate scores alternatives by their relative closeness to an ideal
//! solution (TOPSIS) and assigns dense ranks, reading and writing flat
//! delimited tables at the edges.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
