//! Main module for nestflat library functionality

pub mod config;
pub mod demo;
pub mod element;
pub mod error;
pub mod flatten;
pub mod formats;
pub mod input;
pub mod json;
