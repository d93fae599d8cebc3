mod assign;
pub use assign::{AssignValue, CreateConflict};

use crate::{key, lookup::LookupEntity, Db, Instance};

use indexmap::IndexMap;
use lookup_core::{
    schema::{BelongsTo, Schema, Table, TableId},
    Error, Result,
};

/// A belongs-to relationship whose target is a lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRelation {
    /// Relationship field, e.g. `state`
    pub field: String,

    /// Column storing the lookup row's id, e.g. `state_id`
    pub foreign_key: String,

    /// The lookup table, e.g. `states`
    pub parent: String,

    /// Singular form of `parent`, e.g. `state`
    pub singular: String,
}

impl LookupRelation {
    fn answers_to(&self, accessor: &str) -> bool {
        let accessor = key::accessor(accessor);
        accessor == self.singular || accessor == self.field || accessor == self.parent
    }
}

/// The lookup relationships of one table.
#[derive(Debug, Clone)]
pub struct LookupReferrer {
    table: TableId,
    name: String,
    lookup_models: Vec<LookupRelation>,
}

impl LookupReferrer {
    pub fn new(table: &Table) -> LookupReferrer {
        LookupReferrer {
            table: table.id,
            name: table.name.clone(),
            lookup_models: vec![],
        }
    }

    pub fn table(&self) -> TableId {
        self.table
    }

    pub fn table_name(&self) -> &str {
        &self.name
    }

    /// Relationships registered so far, in declaration order.
    pub fn lookup_models(&self) -> &[LookupRelation] {
        &self.lookup_models
    }

    /// Register `relation` if its target is a lookup table.
    ///
    /// Relations to plain tables are ignored. A relation whose target is not
    /// part of the schema is logged and ignored too; the target's shape can't
    /// be inspected, so it is not treated as a lookup relationship. Returns
    /// `true` if the relation was registered.
    pub fn register_lookup_relationship(
        &mut self,
        schema: &Schema,
        lookups: &IndexMap<String, LookupEntity>,
        relation: &BelongsTo,
    ) -> bool {
        if let Err(err) = schema.resolve_table(&relation.target) {
            tracing::warn!(
                table = %self.name,
                field = %relation.field,
                target = %relation.target,
                error = %err,
                "skipping relationship to unknown table"
            );
            return false;
        }

        let Some(parent) = lookups.get(&relation.target) else {
            return false;
        };

        if self.relation(&relation.field).is_some() {
            return false;
        }

        let singular = key::accessor(&pluralizer::pluralize(parent.table_name(), 1, false));

        tracing::debug!(
            table = %self.name,
            field = %relation.field,
            parent = parent.table_name(),
            "registered lookup relationship"
        );

        self.lookup_models.push(LookupRelation {
            field: relation.field.clone(),
            foreign_key: relation.foreign_key.clone(),
            parent: parent.table_name().to_string(),
            singular,
        });

        true
    }

    fn relation(&self, field: &str) -> Option<&LookupRelation> {
        self.lookup_models.iter().find(|relation| relation.field == field)
    }

    fn relation_to(&self, parent: &str) -> Option<&LookupRelation> {
        self.lookup_models
            .iter()
            .find(|relation| relation.parent == parent)
    }

    /// Rows of this table that point at the `parent` row keyed by `raw_key`.
    ///
    /// An unknown key matches nothing.
    pub async fn find_by_lookup_key(
        &self,
        db: &Db,
        parent: &str,
        raw_key: &str,
    ) -> Result<Vec<Instance>> {
        let relation = self
            .relation_to(parent)
            .ok_or_else(|| Error::unsupported_accessor(&self.name, parent))?;

        self.find_by_relation(db, relation, raw_key).await
    }

    /// Dispatch on `accessor`: the singular lookup table name (`state`), the
    /// relationship field or the lookup table name select the relationship.
    pub async fn find_by(&self, db: &Db, accessor: &str, raw_key: &str) -> Result<Vec<Instance>> {
        let relation = self
            .lookup_models
            .iter()
            .find(|relation| relation.answers_to(accessor))
            .ok_or_else(|| Error::unsupported_accessor(&self.name, accessor))?;

        self.find_by_relation(db, relation, raw_key).await
    }

    async fn find_by_relation(
        &self,
        db: &Db,
        relation: &LookupRelation,
        raw_key: &str,
    ) -> Result<Vec<Instance>> {
        let key = key::accessor(raw_key);
        let Some(id) = db
            .lookup(&relation.parent)?
            .resolve_attribute(db, &key, "id")
            .await?
        else {
            return Ok(vec![]);
        };

        db.find_by_column(&self.name, &relation.foreign_key, id).await
    }
}
