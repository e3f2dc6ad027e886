//! Lakshya Danceverse - dance academy web app
//!
//! This library provides:
//! - The academy catalog (courses, batches, live sessions)
//! - The session state machine behind every view
//! - The admission flow and the inquiries it produces
//! - Browser camera and video wrappers
//! - An optional AI coach backed by a text-generation service
//! - Web UI (Dioxus + Tailwind CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod admission;
pub mod catalog;
pub mod coach;
pub mod media;
pub mod session;

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
