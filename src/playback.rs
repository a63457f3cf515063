//! Playback queue state: which episode is active and how the transport behaves.
//!
//! All commands are total. Anything that would move the index out of the
//! queue is ignored rather than reported.

use rand::Rng;
use tracing::debug;

use crate::models::Episode;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    queue: Vec<Episode>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The active episode. `None` when the queue is empty or `play_queue` was
    /// given an index past the end.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Shuffle always has somewhere to go, even if that is the same episode.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.queue.len()
    }

    pub fn play_single(&mut self, episode: Episode) {
        debug!(episode = %episode.id, "play single episode");
        self.queue = vec![episode];
        self.current_index = 0;
        self.is_playing = true;
    }

    /// Replace the queue and jump to `index`. The index is trusted.
    pub fn play_queue(&mut self, episodes: Vec<Episode>, index: usize) {
        debug!(len = episodes.len(), index, "play queue");
        self.queue = episodes;
        self.current_index = index;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Sync with what the media element reports; its events can arrive after
    /// a command that said otherwise.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::thread_rng());
    }

    pub fn play_next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            if self.queue.is_empty() {
                return;
            }
            self.current_index = rng.gen_range(0..self.queue.len());
        } else if self.has_next() {
            self.current_index += 1;
        } else {
            return;
        }
        debug!(index = self.current_index, shuffle = self.is_shuffling, "next episode");
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_index -= 1;
            debug!(index = self.current_index, "previous episode");
        }
    }

    /// Empty the queue. Transport flags are left alone.
    pub fn clear(&mut self) {
        debug!("clear playback queue");
        self.queue.clear();
        self.current_index = 0;
    }
}
