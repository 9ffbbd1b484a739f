use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador único de una canción dentro del store.
///
/// A diferencia de otros sistemas donde generamos UUIDs en el dominio,
/// aquí el id lo asigna el backing store (AUTOINCREMENT): el dominio
/// nunca fabrica un `SongId` nuevo, solo envuelve el que vuelve de la
/// base de datos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(i32);

impl SongId {
  /// Construye un `SongId` a partir de un rowid ya existente.
  pub fn from_raw(raw: i32) -> Self {
    SongId(raw)
  }

  /// Devuelve el valor entero interno.
  pub fn as_i32(&self) -> i32 {
    self.0
  }
}

impl From<i32> for SongId {
  fn from(raw: i32) -> Self {
    SongId(raw)
  }
}

impl From<SongId> for i32 {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
