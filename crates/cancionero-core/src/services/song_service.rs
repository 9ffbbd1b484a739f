use crate::domain::song::{NewSong, Song};
use crate::errors::CoreError;
use crate::ports::SongRepository;

/// Servicio fino sobre el puerto de persistencia.
///
/// Es la costura que usan las capas superiores (bins, tests): no añade
/// comportamiento propio más allá de delegar y loguear.
pub struct SongService<R>
where
  R: SongRepository,
{
  repo: R,
}

impl<R> SongService<R>
where
  R: SongRepository,
{
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  // -------- COMMAND (write) --------

  pub fn add_song(&self, song: &NewSong) -> Result<Song, CoreError> {
    let stored = self.repo.create_song(song)?;
    tracing::info!(id = %stored.id, title = %stored.title, "song stored");
    Ok(stored)
  }

  // -------- QUERY (read) --------

  pub fn list_songs(&self) -> Result<Vec<Song>, CoreError> {
    let songs = self.repo.list_songs()?;
    tracing::debug!(count = songs.len(), "songs listed");
    Ok(songs)
  }
}
