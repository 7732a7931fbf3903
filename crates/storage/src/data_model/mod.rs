use model::WithId;
use serde::Serialize;
use std::fmt::Debug;
use transfer::registry::Result;
use utility::id::{HasId, Id};

pub mod booking;
pub mod location;
pub mod route;
pub mod vehicle;

/// A table row that maps onto a domain model value. `to_model` is fallible:
/// enum-like TEXT columns are parsed on the way out.
pub trait DatabaseRow {
    type Model: HasId;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Result<Self::Model>;
}

pub(crate) fn with_id<R>(row: R) -> Result<WithId<R::Model>>
where
    R: DatabaseRow,
    <R::Model as HasId>::IdType: Serialize + Debug + Clone,
{
    let id = row.get_id();
    Ok(WithId::new(id, row.to_model()?))
}

pub(crate) fn with_ids<R>(rows: Vec<R>) -> Result<Vec<WithId<R::Model>>>
where
    R: DatabaseRow,
    <R::Model as HasId>::IdType: Serialize + Debug + Clone,
{
    rows.into_iter().map(with_id).collect()
}
