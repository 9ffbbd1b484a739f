use crate::schema::songs;

use diesel::prelude::*;

/// Fila tal como vuelve del store, id incluido.
#[derive(Debug, Queryable)]
#[diesel(table_name = songs)]
pub struct SongRow {
  pub id: i32,
  pub title: String,
  pub artist: String,
}

/// Fila a insertar: sin id, lo asigna AUTOINCREMENT.
#[derive(Debug, Insertable)]
#[diesel(table_name = songs)]
pub struct NewSongRow {
  pub title: String,
  pub artist: String,
}
