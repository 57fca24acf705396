use sea_orm::{DbErr, RuntimeErr};
use sqlx::{error::ErrorKind, Error as SqlxError};

pub trait DatabaseError {
    fn unique_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self) -> bool {
        let Some(db_err) = get_database_error(self) else {
            return false;
        };

        matches!(db_err.kind(), ErrorKind::UniqueViolation)
    }
}

fn get_database_error(err: &DbErr) -> Option<&(dyn sqlx::error::DatabaseError + 'static)> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(&**db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(&**db_err),
        _ => None,
    }
}
