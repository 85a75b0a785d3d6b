//! Shopfront Admin library.
//!
//! This crate provides the admin analytics functionality as a library,
//! allowing it to be tested and reused by the CLI.
//!
//! # Security
//!
//! Every `/api` route requires a session-authenticated administrator. Login
//! itself is handled elsewhere; this crate only reads the session identity.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
