mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::Schema, Result};

use std::{borrow::Cow, fmt::Debug, sync::Arc};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL this driver connects to, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Open a new connection to the database.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response>;

    /// Create every table and index of the schema.
    async fn push_schema(&mut self, schema: &Schema) -> Result<()>;
}

#[async_trait]
impl Driver for Box<dyn Driver> {
    fn url(&self) -> Cow<'_, str> {
        (**self).url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        (**self).connect().await
    }
}
