use dioxus::prelude::*;

use crate::models::Episode;
use crate::playback::PlaybackState;

/// Shared handle to the session's playback state.
///
/// Components never write the signal directly; every mutation goes through
/// one of the commands below so derived flags stay consistent.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerStore {
    state: Signal<PlaybackState>,
}

impl PlayerStore {
    pub fn new(state: Signal<PlaybackState>) -> Self {
        Self { state }
    }

    /// Borrow the state for rendering. Subscribes the calling scope to every
    /// state change.
    pub fn read_with<O>(&self, f: impl FnOnce(&PlaybackState) -> O) -> O {
        f(&self.state.read())
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.state.read().current_episode().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.state.read().is_looping()
    }

    /// Read without subscribing, for event handlers outside of rendering.
    pub fn with_peek<O>(&self, f: impl FnOnce(&PlaybackState) -> O) -> O {
        f(&self.state.peek())
    }

    pub fn play_single(&self, episode: Episode) {
        self.update(|state| state.play_single(episode));
    }

    pub fn play_queue(&self, episodes: Vec<Episode>, index: usize) {
        self.update(|state| state.play_queue(episodes, index));
    }

    pub fn toggle_play(&self) {
        self.update(PlaybackState::toggle_play);
    }

    pub fn toggle_loop(&self) {
        self.update(PlaybackState::toggle_loop);
    }

    pub fn toggle_shuffle(&self) {
        self.update(PlaybackState::toggle_shuffle);
    }

    /// Skips the write when nothing changes, media events echo our own commands.
    pub fn set_playing_state(&self, playing: bool) {
        if self.state.peek().is_playing() == playing {
            return;
        }
        self.update(|state| state.set_playing_state(playing));
    }

    pub fn play_next(&self) {
        self.update(PlaybackState::play_next);
    }

    pub fn play_previous(&self) {
        self.update(PlaybackState::play_previous);
    }

    pub fn clear(&self) {
        self.update(PlaybackState::clear);
    }

    fn update(&self, command: impl FnOnce(&mut PlaybackState)) {
        let mut state = self.state;
        command(&mut state.write());
    }
}

/// Creates the store for this session and shares it with every descendant.
pub fn use_player_store_provider() -> PlayerStore {
    let state = use_signal(PlaybackState::new);
    use_context_provider(|| PlayerStore::new(state))
}

pub fn use_player_store() -> PlayerStore {
    use_context::<PlayerStore>()
}
