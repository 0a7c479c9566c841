//! Database seeding utilities.

use sqlx::PgPool;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config;
use crate::data::{self, Customer, Invoice, RevenueEntry, User};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Per-table counts of inserts that settled successfully.
///
/// A skipped insert (key already present) still counts as settled; only
/// records whose insert errored are missing from the totals.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub users: usize,
    pub customers: usize,
    pub invoices: usize,
    pub revenue: usize,
}

/// Database seeder for inserting the demo dataset.
///
/// Each table routine creates its table if missing, then dispatches one
/// conflict-tolerant insert per record and waits for all of them to
/// settle. Inserts that hit an existing key are skipped silently; inserts
/// that fail outright are logged and skipped without aborting the rest.
pub struct Seeder {
    pool: PgPool,
    hash_cost: u32,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            hash_cost: config::DEFAULT_HASH_COST,
        }
    }

    /// Sets the bcrypt cost applied to user passwords.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Ensures the `uuid-ossp` extension backing the id column defaults.
    pub async fn ensure_uuid_extension(&self) -> Result<(), SeedError> {
        sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Seeds users into the database.
    ///
    /// Passwords are bcrypt-hashed before insertion. Returns the number of
    /// inserts that settled successfully; a record that fails to insert is
    /// logged and skipped, and only a failure to create the table itself
    /// errors the routine.
    pub async fn seed_users(&self, users: &[User]) -> Result<usize, SeedError> {
        info!("Seeding {} users...", users.len());

        if let Err(error) = self.ensure_users_table().await {
            error!(%error, "Error seeding users");
            return Err(error);
        }

        let mut set = JoinSet::new();
        for user in users {
            let user = *user;
            let pool = self.pool.clone();
            let cost = self.hash_cost;
            set.spawn(async move { (user.name, insert_user(&pool, &user, cost).await) });
        }

        let mut seeded = 0;
        while let Some(settled) = set.join_next().await {
            match settled {
                Ok((_, Ok(()))) => seeded += 1,
                Ok((name, Err(error))) => warn!(%error, user = name, "Error inserting user"),
                Err(error) => warn!(%error, "User insert task failed"),
            }
        }

        info!("Seeded {} users", seeded);
        Ok(seeded)
    }

    /// Creates the `users` table if it does not exist.
    async fn ensure_users_table(&self) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Created users table");
        Ok(())
    }

    /// Seeds customers into the database.
    pub async fn seed_customers(&self, customers: &[Customer]) -> Result<usize, SeedError> {
        info!("Seeding {} customers...", customers.len());

        if let Err(error) = self.ensure_customers_table().await {
            error!(%error, "Error seeding customers");
            return Err(error);
        }

        let mut set = JoinSet::new();
        for customer in customers {
            let customer = *customer;
            let pool = self.pool.clone();
            set.spawn(async move { (customer.name, insert_customer(&pool, &customer).await) });
        }

        let mut seeded = 0;
        while let Some(settled) = set.join_next().await {
            match settled {
                Ok((_, Ok(()))) => seeded += 1,
                Ok((name, Err(error))) => {
                    warn!(%error, customer = name, "Error inserting customer");
                }
                Err(error) => warn!(%error, "Customer insert task failed"),
            }
        }

        info!("Seeded {} customers", seeded);
        Ok(seeded)
    }

    /// Creates the `customers` table if it does not exist.
    async fn ensure_customers_table(&self) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                image_url VARCHAR(255) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Created customers table");
        Ok(())
    }

    /// Seeds invoices into the database.
    pub async fn seed_invoices(&self, invoices: &[Invoice]) -> Result<usize, SeedError> {
        info!("Seeding {} invoices...", invoices.len());

        if let Err(error) = self.ensure_invoices_table().await {
            error!(%error, "Error seeding invoices");
            return Err(error);
        }

        let mut set = JoinSet::new();
        for invoice in invoices {
            let invoice = *invoice;
            let pool = self.pool.clone();
            set.spawn(async move { (invoice.id, insert_invoice(&pool, &invoice).await) });
        }

        let mut seeded = 0;
        while let Some(settled) = set.join_next().await {
            match settled {
                Ok((_, Ok(()))) => seeded += 1,
                Ok((id, Err(error))) => warn!(%error, invoice = %id, "Error inserting invoice"),
                Err(error) => warn!(%error, "Invoice insert task failed"),
            }
        }

        info!("Seeded {} invoices", seeded);
        Ok(seeded)
    }

    /// Creates the `invoices` table if it does not exist.
    async fn ensure_invoices_table(&self) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                customer_id UUID NOT NULL,
                amount INT NOT NULL,
                status VARCHAR(255) NOT NULL,
                date DATE NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Created invoices table");
        Ok(())
    }

    /// Seeds monthly revenue entries into the database.
    pub async fn seed_revenue(&self, revenue: &[RevenueEntry]) -> Result<usize, SeedError> {
        info!("Seeding {} revenue entries...", revenue.len());

        if let Err(error) = self.ensure_revenue_table().await {
            error!(%error, "Error seeding revenue");
            return Err(error);
        }

        let mut set = JoinSet::new();
        for entry in revenue {
            let entry = *entry;
            let pool = self.pool.clone();
            set.spawn(async move { (entry.month, insert_revenue(&pool, &entry).await) });
        }

        let mut seeded = 0;
        while let Some(settled) = set.join_next().await {
            match settled {
                Ok((_, Ok(()))) => seeded += 1,
                Ok((month, Err(error))) => {
                    warn!(%error, month, "Error inserting revenue entry");
                }
                Err(error) => warn!(%error, "Revenue insert task failed"),
            }
        }

        info!("Seeded {} revenue entries", seeded);
        Ok(seeded)
    }

    /// Creates the `revenue` table if it does not exist.
    async fn ensure_revenue_table(&self) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS revenue (
                month VARCHAR(4) NOT NULL UNIQUE,
                revenue INT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Created revenue table");
        Ok(())
    }

    /// Runs the complete seeding procedure against the static dataset.
    ///
    /// Ensures the uuid extension, then seeds every table in order: users,
    /// customers, invoices, revenue. Any table routine that errors aborts
    /// the remaining tables and propagates the error.
    pub async fn seed_all(&self) -> Result<SeedSummary, SeedError> {
        self.ensure_uuid_extension().await?;

        let users = self.seed_users(&data::USERS).await?;
        let customers = self.seed_customers(&data::CUSTOMERS).await?;
        let invoices = self.seed_invoices(&data::INVOICES).await?;
        let revenue = self.seed_revenue(&data::REVENUE).await?;

        Ok(SeedSummary {
            users,
            customers,
            invoices,
            revenue,
        })
    }

    /// Clears all seeded demo data.
    ///
    /// **WARNING**: This deletes all rows from the seeded tables. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Reverse of seeding order
        sqlx::query("DELETE FROM revenue")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM invoices")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM customers")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        info!("All data cleared");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Inserts a single user, hashing the password first.
async fn insert_user(pool: &PgPool, user: &User, hash_cost: u32) -> Result<(), SeedError> {
    let password_hash = bcrypt::hash(user.password, hash_cost)?;

    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(user.id)
    .bind(user.name)
    .bind(user.email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts a single customer.
async fn insert_customer(pool: &PgPool, customer: &Customer) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO customers (id, name, email, image_url)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(customer.id)
    .bind(customer.name)
    .bind(customer.email)
    .bind(customer.image_url)
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts a single invoice.
async fn insert_invoice(pool: &PgPool, invoice: &Invoice) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO invoices (id, customer_id, amount, status, date)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(invoice.id)
    .bind(invoice.customer_id)
    .bind(invoice.amount)
    .bind(invoice.status.as_str())
    .bind(invoice.date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts a single monthly revenue entry.
async fn insert_revenue(pool: &PgPool, entry: &RevenueEntry) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO revenue (month, revenue)
        VALUES ($1, $2)
        ON CONFLICT (month) DO NOTHING
        "#,
    )
    .bind(entry.month)
    .bind(entry.revenue)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_hashed_password_is_not_plaintext() {
        let hash = bcrypt::hash("123456", 4).unwrap();

        assert_ne!(hash, "123456");
        assert!(bcrypt::verify("123456", &hash).unwrap());
        assert!(!bcrypt::verify("654321", &hash).unwrap());
    }
}
