pub mod ids;
pub mod song;

pub use ids::SongId;
pub use song::{NewSong, Song};
