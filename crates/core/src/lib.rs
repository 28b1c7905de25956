//! Aurelia Core - Shared types library.
//!
//! This crate provides common types used across all Aurelia components:
//! - `api` - The storefront HTTP API server
//! - `client` - Typed API client and cart state mirror
//! - `integration-tests` - Live-server test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no locking, no HTTP. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, catalog records, cart records, and the wire
//!   types shared by the server and client

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
