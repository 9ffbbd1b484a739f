use crate::domain::ids::SongId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// La Canción (Song): una fila del cancionero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único asignado por el store. Inmutable una vez asignado.
  pub id: SongId,
  /// El título de la canción.
  pub title: String,
  /// El/los intérprete(s), como texto libre.
  pub artist: String,
}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] {} - {}", self.id, self.title, self.artist)
  }
}

/// Borrador de canción: lo que un caller entrega a `create`.
///
/// No lleva `id` a propósito: el id lo asigna el backing store y el
/// sistema de tipos impide que un caller lo suministre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
  pub title: String,
  pub artist: String,
}

impl NewSong {
  pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
    NewSong { title: title.into(), artist: artist.into() }
  }
}
