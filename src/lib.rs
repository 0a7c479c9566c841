//! Demo data seeding for the invoicing dashboard.
//!
//! This crate populates a PostgreSQL database with a fixed placeholder
//! dataset of application users, customers, invoices, and monthly revenue
//! figures, for local development and demos. Tables are created on demand
//! and every insert is conflict-tolerant, so re-running the seeder leaves
//! previously seeded rows in place.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dashboard_seed::prelude::*;
//!
//! let seeder = Seeder::new(pool);
//! let summary = seeder.seed_all().await?;
//! println!("seeded {} users", summary.users);
//! ```

pub mod config;
pub mod data;
pub mod db;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::data::{Customer, Invoice, InvoiceStatus, RevenueEntry, User};
    pub use crate::db::{SeedError, SeedSummary, Seeder};
}
