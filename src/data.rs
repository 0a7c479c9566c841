//! Static placeholder dataset for seeding.
//!
//! The fixed demo records the seeder inserts: application users, the
//! customers they invoice, the invoices themselves, and a year of monthly
//! revenue figures. Ids are assigned here rather than generated at insert
//! time, so re-seeding an existing database conflicts (and skips) instead
//! of duplicating rows.

use time::{Date, macros::date};
use uuid::{Uuid, uuid};

/// Application login account ready for database insertion.
///
/// `password` holds the demo plaintext; the seeder hashes it with bcrypt
/// before it reaches the database.
#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

/// Customer record ready for database insertion.
#[derive(Debug, Clone, Copy)]
pub struct Customer {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

/// Invoice payment state, matching the `status` column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

/// Invoice record ready for database insertion.
#[derive(Debug, Clone, Copy)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Date,
}

/// One month of aggregate revenue, keyed by abbreviated month name.
#[derive(Debug, Clone, Copy)]
pub struct RevenueEntry {
    pub month: &'static str,
    pub revenue: i32,
}

/// Demo login accounts.
pub const USERS: [User; 3] = [
    User {
        id: uuid!("7d2fd3e1-9a40-4b36-8c27-5a1e90f6b214"),
        name: "Demo Admin",
        email: "admin@example.com",
        password: "123456",
    },
    User {
        id: uuid!("3f8c1b77-2d54-4e0b-a6c3-91d4e87a5f02"),
        name: "Maya Okafor",
        email: "maya@example.com",
        password: "password123",
    },
    User {
        id: uuid!("c58a2d90-6f13-4ba8-b7e5-208c4d9e6a31"),
        name: "Tomas Rivera",
        email: "tomas@example.com",
        password: "letmein42",
    },
];

/// Demo customers, with avatar paths served by the dashboard frontend.
pub const CUSTOMERS: [Customer; 10] = [
    Customer {
        id: uuid!("1e5fb2a9-6c07-4d11-9d84-3fa2c815b6e0"),
        name: "Evelyn Zhang",
        email: "evelyn@zhang.com",
        image_url: "/customers/evelyn-zhang.png",
    },
    Customer {
        id: uuid!("84a3d7f2-1b60-4c29-8f35-d90e6b2a74c1"),
        name: "Marcus Webb",
        email: "marcus@webb.com",
        image_url: "/customers/marcus-webb.png",
    },
    Customer {
        id: uuid!("5b9e0c44-7d28-4f73-a1b6-42c8e95d307a"),
        name: "Priya Natarajan",
        email: "priya@natarajan.com",
        image_url: "/customers/priya-natarajan.png",
    },
    Customer {
        id: uuid!("f72c6a15-80db-4e94-b3c7-59a14d2e86fb"),
        name: "Jonas Lindqvist",
        email: "jonas@lindqvist.com",
        image_url: "/customers/jonas-lindqvist.png",
    },
    Customer {
        id: uuid!("29d45b80-3e6a-4c17-9f20-b671a8c35d94"),
        name: "Amara Diallo",
        email: "amara@diallo.com",
        image_url: "/customers/amara-diallo.png",
    },
    Customer {
        id: uuid!("b06c83d9-4a25-4df0-82e1-7c5f9a30b46d"),
        name: "Felix Gruber",
        email: "felix@gruber.com",
        image_url: "/customers/felix-gruber.png",
    },
    Customer {
        id: uuid!("6e1a94c7-d582-4b3f-a049-8d27c6e15f38"),
        name: "Hana Sato",
        email: "hana@sato.com",
        image_url: "/customers/hana-sato.png",
    },
    Customer {
        id: uuid!("0d7b52e8-96c4-4a60-b815-3e9f7a2c40d6"),
        name: "Diego Ferreira",
        email: "diego@ferreira.com",
        image_url: "/customers/diego-ferreira.png",
    },
    Customer {
        id: uuid!("948fe6b1-2c73-4d05-9a38-60e4b1d87c52"),
        name: "Nadia Petrova",
        email: "nadia@petrova.com",
        image_url: "/customers/nadia-petrova.png",
    },
    Customer {
        id: uuid!("57c20a93-e8b6-4f41-86d2-14a9c7e3b085"),
        name: "Owen Gallagher",
        email: "owen@gallagher.com",
        image_url: "/customers/owen-gallagher.png",
    },
];

/// Demo invoices. Every `customer_id` references an entry in [`CUSTOMERS`].
pub const INVOICES: [Invoice; 15] = [
    Invoice {
        id: uuid!("e2d18c05-4f7a-4b92-8361-9cd0a5e47f28"),
        customer_id: CUSTOMERS[0].id,
        amount: 15795,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 12 - 06),
    },
    Invoice {
        id: uuid!("7a95c3e0-18d6-4c4b-b20f-6e81d4a29c57"),
        customer_id: CUSTOMERS[1].id,
        amount: 20348,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 11 - 14),
    },
    Invoice {
        id: uuid!("40b8f6d2-c791-4e35-a8c4-52d7e90b31f6"),
        customer_id: CUSTOMERS[4].id,
        amount: 3040,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 10 - 29),
    },
    Invoice {
        id: uuid!("9c36a0d8-5b42-4f17-90e5-c824b7d61a39"),
        customer_id: CUSTOMERS[3].id,
        amount: 44800,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 09 - 10),
    },
    Invoice {
        id: uuid!("1f60e4b9-a273-4d88-b5a1-08c95e3d72f4"),
        customer_id: CUSTOMERS[5].id,
        amount: 34577,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 08 - 05),
    },
    Invoice {
        id: uuid!("86d2c7f3-90e1-4a56-8d30-b74a1c58e692"),
        customer_id: CUSTOMERS[7].id,
        amount: 54246,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 07 - 16),
    },
    Invoice {
        id: uuid!("3b74d9e6-f025-4c81-9fb8-27a60d94c5e3"),
        customer_id: CUSTOMERS[6].id,
        amount: 8945,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 27),
    },
    Invoice {
        id: uuid!("d50f9a27-63c8-4b40-a79e-81f3c6d20b54"),
        customer_id: CUSTOMERS[3].id,
        amount: 32545,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 09),
    },
    Invoice {
        id: uuid!("62e8b1c4-07d9-4f63-b2d5-490a8e7c31f0"),
        customer_id: CUSTOMERS[4].id,
        amount: 1250,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 17),
    },
    Invoice {
        id: uuid!("f9340d71-b5a6-4e29-85c0-d362f81b9a47"),
        customer_id: CUSTOMERS[5].id,
        amount: 8546,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 07),
    },
    Invoice {
        id: uuid!("08c6e5a3-d914-4b77-9e42-7f05a8d3c261"),
        customer_id: CUSTOMERS[1].id,
        amount: 500,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 08 - 19),
    },
    Invoice {
        id: uuid!("b17d40f8-29e3-4c05-a6f7-53b90c2e84d1"),
        customer_id: CUSTOMERS[5].id,
        amount: 8945,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 03),
    },
    Invoice {
        id: uuid!("74a9f2c6-e580-4d13-8b96-0ac47d5e31b2"),
        customer_id: CUSTOMERS[2].id,
        amount: 8945,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 18),
    },
    Invoice {
        id: uuid!("c03b86e1-57f4-4a28-b1d0-96e25a7c40f8"),
        customer_id: CUSTOMERS[0].id,
        amount: 67800,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 10 - 04),
    },
    Invoice {
        id: uuid!("5e92a7d4-31c0-4f66-a853-b08d19e64c27"),
        customer_id: CUSTOMERS[2].id,
        amount: 1000,
        status: InvoiceStatus::Paid,
        date: date!(2022 - 06 - 05),
    },
];

/// A year of monthly revenue, in dollars.
pub const REVENUE: [RevenueEntry; 12] = [
    RevenueEntry { month: "Jan", revenue: 2000 },
    RevenueEntry { month: "Feb", revenue: 1800 },
    RevenueEntry { month: "Mar", revenue: 2200 },
    RevenueEntry { month: "Apr", revenue: 2500 },
    RevenueEntry { month: "May", revenue: 2300 },
    RevenueEntry { month: "Jun", revenue: 3200 },
    RevenueEntry { month: "Jul", revenue: 3500 },
    RevenueEntry { month: "Aug", revenue: 3700 },
    RevenueEntry { month: "Sep", revenue: 2500 },
    RevenueEntry { month: "Oct", revenue: 2800 },
    RevenueEntry { month: "Nov", revenue: 3000 },
    RevenueEntry { month: "Dec", revenue: 4800 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_per_table() {
        let user_ids: HashSet<_> = USERS.iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), USERS.len());

        let customer_ids: HashSet<_> = CUSTOMERS.iter().map(|c| c.id).collect();
        assert_eq!(customer_ids.len(), CUSTOMERS.len());

        let invoice_ids: HashSet<_> = INVOICES.iter().map(|i| i.id).collect();
        assert_eq!(invoice_ids.len(), INVOICES.len());
    }

    #[test]
    fn test_user_emails_are_unique() {
        let emails: HashSet<_> = USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), USERS.len());
    }

    #[test]
    fn test_invoices_reference_known_customers() {
        for invoice in &INVOICES {
            assert!(
                CUSTOMERS.iter().any(|c| c.id == invoice.customer_id),
                "invoice {} references unknown customer {}",
                invoice.id,
                invoice.customer_id
            );
        }
    }

    #[test]
    fn test_invoice_amounts_are_positive() {
        for invoice in &INVOICES {
            assert!(
                invoice.amount > 0,
                "invoice {} has non-positive amount",
                invoice.id
            );
        }
    }

    #[test]
    fn test_revenue_covers_twelve_distinct_months() {
        assert_eq!(REVENUE.len(), 12);

        let months: HashSet<_> = REVENUE.iter().map(|r| r.month).collect();
        assert_eq!(months.len(), REVENUE.len());

        for entry in &REVENUE {
            assert!(entry.month.len() <= 4, "month key {} too long", entry.month);
        }
    }

    #[test]
    fn test_status_database_representation() {
        assert_eq!(InvoiceStatus::Pending.as_str(), "pending");
        assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
    }
}
