//! # Repository Module
//!
//! Database repository implementations for Velo OMS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Tauri Command                                                         │
//! │       │                                                                 │
//! │       │  db.orders().create(&draft, 500)                               │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── create(&self, draft, default_gst_bps)                             │
//! │  ├── get(&self, id)                                                    │
//! │  ├── update(&self, id, draft)                                          │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL (transactional where it matters)                          │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • Easy to test against an in-memory database                          │
//! │  • SQL is isolated in one place                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and stock levels
//! - [`catalog::CatalogRepository`] - Categories and bike models
//! - [`order::OrderRepository`] - Orders, lines, ID allocation, stock moves

pub mod catalog;
pub mod order;
pub mod product;
