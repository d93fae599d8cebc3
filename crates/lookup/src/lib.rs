//! Lookup tables addressed by a human-readable key.
//!
//! A lookup table is a small reference table (`states`, `statuses`) whose rows
//! are usually referred to by name rather than by identifier. Tables that
//! belong to a lookup table can be queried and assigned with that name:
//!
//! ```no_run
//! use lookup::{schema::Table, Db, Instance, Lookup};
//!
//! # async fn example() -> lookup::Result<()> {
//! let db = Db::builder()
//!     .lookup(Lookup::new("states"))
//!     .table(Table::builder("addresses").belongs_to("state", "states").build())
//!     .connect("sqlite::memory:")
//!     .await?;
//! db.push_schema().await?;
//!
//! // "ga" does not exist yet: it is created on assignment
//! let mut address = Instance::new("addresses");
//! db.assign(&mut address, "state", "GA").await?;
//! db.save(&mut address).await?;
//!
//! let in_georgia = db.find_by("addresses", "state", "ga").await?;
//! assert_eq!(in_georgia.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub use db::{Builder, Db};

mod instance;
pub use instance::Instance;

pub mod key;

pub mod lookup;
pub use lookup::{Lookup, LookupEntity, LookupRow, Resolved};

pub mod referrer;
pub use referrer::{AssignValue, CreateConflict, LookupReferrer, LookupRelation};

pub use lookup_core::{driver, schema, stmt, Error, Result};
