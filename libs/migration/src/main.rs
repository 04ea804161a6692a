//! Operator CLI for the directory schema.
//!
//! The API applies pending migrations at startup; this binary covers the rest
//! (`status`, `down`, `fresh`, `refresh`) against `DATABASE_URL`:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/directory cargo run -p migration -- status
//! ```

#[tokio::main]
async fn main() {
    sea_orm_migration::cli::run_cli(migration::Migrator).await;
}
