//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and translate
//! the typed filter structures from the model layer into query conditions. All database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod category;
pub mod job;
pub mod server;
pub mod service_request;
pub mod submission;
pub mod waitlist;

#[cfg(test)]
mod test;

use sea_orm::sea_query::{Expr, ExprTrait, Func, IntoColumnRef, SimpleExpr};

/// Case-insensitive substring predicate: `lower(col) LIKE '%needle%'`.
///
/// Queries that join other tables must pass a table-qualified
/// `(Entity, Column)` pair so the column stays unambiguous.
pub(crate) fn contains_insensitive<C: IntoColumnRef>(col: C, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", needle.to_lowercase()))
}

/// Tag-membership predicate over a JSON array column.
///
/// Stored tags are normalized lowercase tokens, so membership of `token`
/// reduces to finding the JSON-encoded string `"token"` in the serialized
/// array.
pub(crate) fn tag_contains<C: IntoColumnRef>(col: C, token: &str) -> SimpleExpr {
    Expr::col(col).like(format!("%\"{}\"%", token))
}
