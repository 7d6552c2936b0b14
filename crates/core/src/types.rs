/// Identifier type used for all server-assigned entity ids.
pub type DbId = i64;
