//! The components module contains all shared components for the widget.

mod app;
mod audio_manager;
mod episode_list;
mod header;
mod icons;
mod player;
mod store;

pub use app::*;
pub use audio_manager::*;
pub use episode_list::*;
pub use header::*;
pub use icons::*;
pub use player::*;
pub use store::*;
