mod filter;
mod ids;
mod queue;
mod song;

pub use filter::{FilterSpec, SearchField};
pub use ids::{SongId, UserId};
pub use queue::FocusQueue;
pub use song::{CreateSong, Song};
