//! Core library components.
//!
//! This module contains the reusable logic for locating private keys,
//! parsing env files, and decrypting their values.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod domain;
pub mod environ;
pub mod locator;
pub mod parser;
pub mod secrets;
pub mod types;
