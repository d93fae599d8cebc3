use super::{LookupReferrer, LookupRelation};
use crate::{
    lookup::{LookupEntity, LookupRow},
    Db, Instance,
};

use lookup_core::{Error, Result};

/// What to do when implicitly creating a lookup row fails, typically because
/// a concurrent writer inserted the same key first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreateConflict {
    /// Read the key again and use whichever row is there now. Falls back to
    /// the raw key when the second read also misses.
    #[default]
    Reread,

    /// Store the raw key in the foreign key column. Saving the referring row
    /// then fails validation.
    Fallback,
}

/// A value assigned to a lookup relationship.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignValue {
    /// A human-readable key, resolved (and maybe created) on assignment
    Key(String),

    /// A row that was already resolved
    Row(LookupRow),
}

impl From<&str> for AssignValue {
    fn from(value: &str) -> Self {
        AssignValue::Key(value.to_string())
    }
}

impl From<String> for AssignValue {
    fn from(value: String) -> Self {
        AssignValue::Key(value)
    }
}

impl From<&String> for AssignValue {
    fn from(value: &String) -> Self {
        AssignValue::Key(value.clone())
    }
}

impl From<LookupRow> for AssignValue {
    fn from(value: LookupRow) -> Self {
        AssignValue::Row(value)
    }
}

impl From<&LookupRow> for AssignValue {
    fn from(value: &LookupRow) -> Self {
        AssignValue::Row(value.clone())
    }
}

impl LookupReferrer {
    /// Assign the lookup relationship `field` of `instance`.
    ///
    /// A key is resolved to its row, creating the row when it does not exist
    /// yet, and the row's id lands in the foreign key column. When no row can
    /// be had the raw key is stored instead; see [`CreateConflict`].
    pub async fn assign(
        &self,
        db: &Db,
        instance: &mut Instance,
        field: &str,
        value: AssignValue,
    ) -> Result<()> {
        let relation = self
            .relation(field)
            .ok_or_else(|| Error::unsupported_accessor(&self.name, field))?;
        let parent = db.lookup(&relation.parent)?;

        let row = match value {
            AssignValue::Row(row) => {
                if !parent.owns(&row) {
                    return Err(Error::invalid_schema(format!(
                        "`{}.{field}` expects a row of `{}`, got a row of `{}`",
                        self.name,
                        parent.table_name(),
                        row.table()
                    )));
                }
                row
            }
            AssignValue::Key(raw_key) => match self.resolve_or_create(db, parent, &raw_key).await? {
                Some(row) => row,
                None => {
                    instance.set(&relation.foreign_key, raw_key);
                    return Ok(());
                }
            },
        };

        assign_row(instance, relation, &row);
        Ok(())
    }

    /// `None` means the raw key should be stored.
    async fn resolve_or_create(
        &self,
        db: &Db,
        parent: &LookupEntity,
        raw_key: &str,
    ) -> Result<Option<LookupRow>> {
        if let Some(row) = parent.resolve_record(db, raw_key).await? {
            return Ok(Some(row));
        }

        let config = db.config();
        if !config.implicit_create {
            return Ok(None);
        }

        let err = match parent.create_for_key(db, raw_key).await {
            Ok(row) => return Ok(Some(row)),
            Err(err) => err,
        };

        // Anything other than a rejected row is a real failure.
        if !err.is_validation() {
            return Err(err);
        }

        match config.create_conflict {
            CreateConflict::Reread => {
                let row = parent.resolve_record(db, raw_key).await?;
                if row.is_none() {
                    tracing::warn!(
                        table = parent.table_name(),
                        key = raw_key,
                        error = %err,
                        "lookup row could not be created or re-read; storing raw key"
                    );
                }
                Ok(row)
            }
            CreateConflict::Fallback => {
                tracing::warn!(
                    table = parent.table_name(),
                    key = raw_key,
                    error = %err,
                    "lookup row could not be created; storing raw key"
                );
                Ok(None)
            }
        }
    }
}

fn assign_row(instance: &mut Instance, relation: &LookupRelation, row: &LookupRow) {
    instance.set(&relation.foreign_key, row.id());
}
