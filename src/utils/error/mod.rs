//! Error handling utilities
//!
//! This module defines the crate error type and its helper constructors.

pub mod error;


pub use error::*;
