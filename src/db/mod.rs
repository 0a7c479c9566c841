//! Database integration for seeding the demo dataset.
//!
//! The [`Seeder`] provides one routine per table plus [`Seeder::seed_all`]
//! to run the whole procedure in dependency order.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
