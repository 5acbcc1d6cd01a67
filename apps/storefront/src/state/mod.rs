//! # State Module
//!
//! Application state for the storefront.
//!
//! Each concern gets its own state type, so a command takes exactly the
//! state it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐  │
//! │  │  DataState   │  │  CartState   │  │ StoreConfig  │  │SessionState │  │
//! │  │              │  │              │  │              │  │             │  │
//! │  │  Store       │  │  Arc<Mutex<  │  │  shipping    │  │ RwLock<     │  │
//! │  │  (RwLock     │  │    Cart      │  │  promotions  │  │   Session   │  │
//! │  │   tables)    │  │  >>          │  │  currency    │  │ >           │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • DataState: Store has internal RwLocks                                │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access           │
//! │  • StoreConfig: Read-only after initialization                          │
//! │  • SessionState: Read often, written on sign-in/out                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod data;
mod session;

pub use cart::CartState;
pub use config::StoreConfig;
pub use data::DataState;
pub use session::SessionState;
