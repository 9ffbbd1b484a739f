// crates/cancionero-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Cancionero.
///
/// Las capas superiores (bins, tests, una futura CLI) deberían mapear
/// este error a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// Cualquier fallo de persistencia: conexión caída, sentencia
  /// malformada, violación de constraint, fallo de I/O. El store no
  /// distingue más fino que esto.
  #[error("repository error: {0}")]
  Repository(String),
}
