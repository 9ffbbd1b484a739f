pub mod bootstrap;
pub mod config;
pub mod models;
pub mod schema;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

use cancionero_core::domain::SongId;
use cancionero_core::domain::song::{NewSong, Song};
use cancionero_core::errors::CoreError;
use cancionero_core::ports::SongRepository;

use crate::config::StorageConfig;
use crate::models::{NewSongRow, SongRow};

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
type SqlitePooledConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub struct SqliteSongRepository {
  pool: SqlitePool,
}

impl SqliteSongRepository {
  /// Abre (o crea) la base en `database_url` y deja el esquema listo.
  pub fn new(database_url: &str) -> Result<Self, CoreError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool =
      Pool::builder().build(manager).map_err(|e| CoreError::Repository(e.to_string()))?;

    let repo = Self { pool };

    // Bootstrap en construcción: idempotente, la tabla existe antes de
    // la primera operación.
    let mut conn = repo.conn()?;
    bootstrap::ensure_schema(&mut conn)?;

    Ok(repo)
  }

  /// Variante usada por los bins: ruta y journal_mode salen de la
  /// sección `[storage]` de cancionero.toml.
  pub fn new_from_config() -> Result<Self, CoreError> {
    let cfg = StorageConfig::load().map_err(|e| CoreError::Repository(e.to_string()))?;
    let repo = Self::new(&cfg.db_path.to_string_lossy())?;

    if let Some(mode) = &cfg.journal_mode {
      let mut conn = repo.conn()?;
      conn
        .batch_execute(&format!("PRAGMA journal_mode = {mode};"))
        .map_err(|e| CoreError::Repository(e.to_string()))?;
    }

    Ok(repo)
  }

  /// Checkout de una conexión del pool. Cada operación toma la suya y
  /// el pool la recupera al salir del scope, falle o no la sentencia.
  fn conn(&self) -> Result<SqlitePooledConn, CoreError> {
    self.pool.get().map_err(|e| CoreError::Repository(e.to_string()))
  }

  /// Tira el esquema completo. Después de esto cualquier operación
  /// devuelve error hasta volver a bootstrapear.
  pub fn reset(&self) -> Result<(), CoreError> {
    let mut conn = self.conn()?;
    bootstrap::drop_schema(&mut conn)
  }
}

fn song_to_new_row(song: &NewSong) -> NewSongRow {
  NewSongRow { title: song.title.clone(), artist: song.artist.clone() }
}

fn row_to_song(row: SongRow) -> Song {
  Song { id: SongId::from_raw(row.id), title: row.title, artist: row.artist }
}

impl SongRepository for SqliteSongRepository {
  fn create_song(&self, song: &NewSong) -> Result<Song, CoreError> {
    use crate::schema::songs::dsl::*;

    let new_row = song_to_new_row(song);
    let mut conn = self.conn()?;

    // RETURNING nos devuelve la fila con el id que asignó SQLite:
    // una fila devuelta == una fila insertada.
    let inserted: SongRow = diesel::insert_into(songs)
      .values(&new_row)
      .get_result(&mut conn)
      .map_err(|e| CoreError::Repository(e.to_string()))?;

    tracing::debug!(id = inserted.id, "song row inserted");

    Ok(row_to_song(inserted))
  }

  fn list_songs(&self) -> Result<Vec<Song>, CoreError> {
    use crate::schema::songs::dsl::*;

    let mut conn = self.conn()?;

    let rows =
      songs.load::<SongRow>(&mut conn).map_err(|e| CoreError::Repository(e.to_string()))?;

    tracing::debug!(count = rows.len(), "song rows loaded");

    Ok(rows.into_iter().map(row_to_song).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn open_repo(dir: &std::path::Path) -> SqliteSongRepository {
    let db = dir.join("songs.db");
    SqliteSongRepository::new(db.to_str().unwrap()).expect("failed to open repo")
  }

  #[test]
  fn fresh_store_lists_empty() {
    let tmp = tempdir().unwrap();
    let repo = open_repo(tmp.path());

    let songs = repo.list_songs().unwrap();
    assert!(songs.is_empty());
  }

  #[test]
  fn create_round_trips_through_list() {
    let tmp = tempdir().unwrap();
    let repo = open_repo(tmp.path());

    let stored = repo.create_song(&NewSong::new("Let it be", "Beatles")).unwrap();
    assert!(stored.id.as_i32() > 0);

    let songs = repo.list_songs().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].title, "Let it be");
    assert_eq!(songs[0].artist, "Beatles");
    assert_eq!(songs[0].id, stored.id);
  }

  #[test]
  fn creates_accumulate_with_distinct_ids() {
    let tmp = tempdir().unwrap();
    let repo = open_repo(tmp.path());

    let a = repo.create_song(&NewSong::new("Let it be", "Beatles")).unwrap();
    let b = repo.create_song(&NewSong::new("Hotel California", "Eagles")).unwrap();
    let c = repo.create_song(&NewSong::new("Kashmir", "Led Zeppelin")).unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);

    let songs = repo.list_songs().unwrap();
    assert_eq!(songs.len(), 3);
  }

  #[test]
  fn list_is_stable_without_writes() {
    let tmp = tempdir().unwrap();
    let repo = open_repo(tmp.path());

    repo.create_song(&NewSong::new("Hotel California", "Eagles")).unwrap();
    repo.create_song(&NewSong::new("Kashmir", "Led Zeppelin")).unwrap();

    let first = repo.list_songs().unwrap();
    let second = repo.list_songs().unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn empty_strings_are_permitted() {
    let tmp = tempdir().unwrap();
    let repo = open_repo(tmp.path());

    let stored = repo.create_song(&NewSong::new("", "")).unwrap();
    assert_eq!(stored.title, "");
    assert_eq!(stored.artist, "");
  }

  #[test]
  fn row_maps_by_column_name() {
    let tmp = tempdir().unwrap();
    let repo = open_repo(tmp.path());

    // Fila sembrada por fuera del repo, con id explícito.
    let mut conn = repo.conn().unwrap();
    conn
      .batch_execute("INSERT INTO songs (id, title, artist) VALUES (3, 'Kashmir', 'Led Zeppelin');")
      .unwrap();
    drop(conn);

    let songs = repo.list_songs().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].id, SongId::from_raw(3));
    assert_eq!(songs[0].title, "Kashmir");
    assert_eq!(songs[0].artist, "Led Zeppelin");
  }

  #[test]
  fn reopening_preserves_rows() {
    let tmp = tempdir().unwrap();

    {
      let repo = open_repo(tmp.path());
      repo.create_song(&NewSong::new("Let it be", "Beatles")).unwrap();
    }

    // Segundo arranque sobre el mismo archivo: el bootstrap no debe
    // recrear la tabla ni perder filas.
    let repo = open_repo(tmp.path());
    let songs = repo.list_songs().unwrap();
    assert_eq!(songs.len(), 1);
  }

  #[test]
  fn operations_report_failure_after_reset() {
    let tmp = tempdir().unwrap();
    let repo = open_repo(tmp.path());

    repo.reset().unwrap();

    let create = repo.create_song(&NewSong::new("Let it be", "Beatles"));
    assert!(matches!(create, Err(CoreError::Repository(_))));

    let list = repo.list_songs();
    assert!(matches!(list, Err(CoreError::Repository(_))));
  }
}
