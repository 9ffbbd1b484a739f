use cancionero_core::domain::song::NewSong;
use cancionero_core::services::SongService;
use cancionero_storage::SqliteSongRepository;

fn main() {
  tracing_subscriber::fmt::init();

  // Ruta y journal_mode salen de [storage] en cancionero.toml;
  // exporta CANCIONERO_BASE_DIR para un layout portable.
  let repo = SqliteSongRepository::new_from_config().expect("failed to connect");
  let service = SongService::new(repo);

  for (title, artist) in
    [("Let it be", "Beatles"), ("Hotel California", "Eagles"), ("Kashmir", "Led Zeppelin")]
  {
    let stored = service.add_song(&NewSong::new(title, artist)).expect("failed to save song");
    println!("Saved: {stored}");
  }

  let songs = service.list_songs().expect("failed to list songs");

  println!("Songs in store ({}):", songs.len());
  for song in songs {
    println!("  {song}");
  }
}
