#[macro_use]
extern crate diesel;

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{error, info};

use errors::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// In-memory databases live as long as their connection, so the pool for one
/// must hand out a single shared connection.
pub const MEMORY_DATABASE_URL: &str = ":memory:";

#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub fn get_conn(pool: &DbPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err.into()
    })
}

pub fn new_pool(database_url: &str) -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = Pool::builder().connection_customizer(Box::new(ConnectionOptions {
        busy_timeout: Duration::from_secs(5),
    }));
    if database_url == MEMORY_DATABASE_URL {
        builder = builder.max_size(1).max_lifetime(None).idle_timeout(None);
    }

    builder
        .build(manager)
        .map_err(|err| {
            error!("Failed to create db pool - {}", err.to_string());
            err.into()
        })
}

pub fn run_migrations(pool: &DbPool) -> Result<(), Error> {
    let mut pooled = get_conn(pool)?;
    let conn: &mut SqliteConnection = &mut pooled;

    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|err| {
        error!("Failed to run migrations - {}", err);
        Error::InternalServerError("Failed to run migrations".into())
    })?;

    for version in applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}
