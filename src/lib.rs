//! # Homefix Architecture
//!
//! Homefix is the **UI-agnostic core** of a small administrative dashboard for
//! a home-repair service. It tracks the Jobs technicians are dispatched on,
//! the Clients whose homes they fix, and the admin Users who may log in. The
//! presentation layer (routes, forms, tables) lives elsewhere and consumes
//! this crate through the [`api::Dashboard`] facade.
//!
//! There is no real server behind the facade: every operation is a mock
//! "endpoint" that sleeps for a fixed artificial delay to model network cost,
//! validates its inputs against the in-memory stores, and persists through a
//! localStorage-style blob store.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                    │
//! │  - Owns the three entity stores and the blob backend    │
//! │  - One async method per dashboard operation             │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (service/*.rs)                           │
//! │  - Artificial delay, validation, mutation, save         │
//! │  - Fails with one globally unique code per check        │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                 │
//! │  - EntityStore: ordered records + id allocator          │
//! │  - BlobStore trait + merge-on-load persistence bridge   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//!
//! Everything is single-threaded and cooperative. Operations suspend only at
//! their artificial-delay point and otherwise run to completion, and the
//! facade takes `&mut self`, so two operations on the same [`api::Dashboard`]
//! can never interleave. Two dashboards sharing one blob store are still
//! last-writer-wins on save; see [`store::bridge`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`service`]: Per-entity mock endpoints and their parameter structs
//! - [`store`]: Entity stores, the blob-store trait, the persistence bridge
//! - [`validate`]: Referential-integrity and credential checks
//! - [`model`]: Core data types (`Job`, `Client`, `User`)
//! - [`error`]: Error types and the numeric error-code table

pub mod api;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod validate;
