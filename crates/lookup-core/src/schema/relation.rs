/// A many-to-one relationship: the declaring table stores the target's
/// primary key in `foreign_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsTo {
    /// Name of the relationship field, e.g. `state`
    pub field: String,

    /// Column holding the target's identifier, e.g. `state_id`
    pub foreign_key: String,

    /// Name of the target table, e.g. `states`
    pub target: String,
}
