use crate::domain::song::{NewSong, Song};
use crate::errors::CoreError;

/// Puerto de persistencia para canciones.
///
/// El adapter (SQLite u otro) es responsable de asignar el id en
/// `create_song` y de devolver la fila tal como quedó almacenada.
pub trait SongRepository {
  /// Inserta una canción nueva y devuelve la fila almacenada,
  /// incluyendo el id asignado por el store.
  fn create_song(&self, song: &NewSong) -> Result<Song, CoreError>;

  /// Devuelve todas las canciones, en el orden del cursor del store.
  /// Vacío no es error: una tabla recién creada lista `Ok(vec![])`.
  fn list_songs(&self) -> Result<Vec<Song>, CoreError>;
}
