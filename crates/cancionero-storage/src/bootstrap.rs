use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use cancionero_core::errors::CoreError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Crea la tabla `songs` si no existe. Idempotente: correrlo sobre una
/// base ya inicializada no hace nada.
pub fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), CoreError> {
  let applied = conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| CoreError::Repository(e.to_string()))?;

  if !applied.is_empty() {
    tracing::info!(count = applied.len(), "applied pending migrations");
  }

  Ok(())
}

/// Contraparte de `ensure_schema`: revierte todas las migraciones
/// (tira la tabla). Pensado para reset en tests y el bin `reset_db`.
pub fn drop_schema(conn: &mut SqliteConnection) -> Result<(), CoreError> {
  conn.revert_all_migrations(MIGRATIONS).map_err(|e| CoreError::Repository(e.to_string()))?;

  tracing::info!("schema dropped");
  Ok(())
}
