//! # commit-composer
//!
//! Leptos + WASM client that asks a backend to turn staged git changes into a
//! commit message, shows the result, and keeps a short history of past ones.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod theme;
pub mod types;
