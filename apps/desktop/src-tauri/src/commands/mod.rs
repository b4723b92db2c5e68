//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Inventory search, CRUD, low stock
//! ├── catalog.rs  ◄─── Category and bike model lists
//! ├── draft.rs    ◄─── Order draft assembly
//! ├── order.rs    ◄─── Order lifecycle (create/update/delete)
//! ├── invoice.rs  ◄─── Invoice generation
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const products = await invoke('search_products', {                     │
//! │    query: 'wheel'                                                       │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn search_products(                                              │
//! │      db: State<'_, DbState>,   ◄── Injected by Tauri                   │
//! │      query: String,            ◄── From invoke params                  │
//! │  ) -> Result<Vec<Product>, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: Product[]                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs database
//! async fn list_orders(db: State<'_, DbState>, ...)
//!
//! // Only needs the draft
//! fn get_draft(draft: State<'_, DraftState>)
//!
//! // Needs database, draft, and config
//! async fn create_order(db: ..., draft: ..., config: ...)
//! ```

pub mod catalog;
pub mod config;
pub mod draft;
pub mod invoice;
pub mod order;
pub mod product;
