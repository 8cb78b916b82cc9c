//! # Price Store
//!
//! Loads a wide-format commodity price table (one row per commodity, one
//! column per calendar month) and reshapes it into an immutable
//! calendar-indexed store with per-commodity forward-filled series.
//!
//! The month index is synthetic: it starts at the 2014-01 epoch and assigns
//! one month-end date per value column of the raw table. Reshaping happens
//! once at startup; afterwards the store only serves cheap read-only column
//! lookups.
//!
//! ## Quick Start
//!
//! ```no_run
//! use price_store::PriceStore;
//!
//! # fn main() -> price_store::Result<()> {
//! let store = PriceStore::from_csv("monthly_data.csv")?;
//!
//! for name in store.commodities() {
//!     println!("{}", name);
//! }
//!
//! let onion = store.series("Onion")?;
//! println!("{} observations", onion.len());
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use crate::error::{Result, StoreError};
pub use crate::store::{CommoditySeries, PriceStore};
