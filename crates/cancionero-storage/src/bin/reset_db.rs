use cancionero_storage::SqliteSongRepository;

fn main() {
  tracing_subscriber::fmt::init();

  // Usa la misma base que smoke_songs.
  let repo = SqliteSongRepository::new_from_config().expect("failed to connect");

  repo.reset().expect("failed to drop schema");

  println!("All tables dropped.");
}
