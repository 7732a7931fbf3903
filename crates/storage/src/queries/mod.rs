use transfer::registry::RegistryError;

pub mod booking;
pub mod location;
pub mod route;
pub mod vehicle;

pub(crate) fn convert_error(why: sqlx::Error) -> RegistryError {
    match why {
        sqlx::Error::RowNotFound => RegistryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RegistryError::Conflict(db.message().to_owned())
        }
        _ => RegistryError::Other(Box::new(why)),
    }
}
