//! Audio Manager - bridges the playback store to the page's audio element.
//! The element lives outside the component tree so re-renders never restart it.

use dioxus::prelude::*;

use crate::playback::PlaybackState;

#[cfg(target_arch = "wasm32")]
use crate::components::use_player_store;
use crate::utils::whole_seconds;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "podcastr-audio";

/// The imperative surface of a media element that playback needs.
pub trait MediaElement {
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    fn set_looping(&mut self, looping: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
    None,
}

/// Bring the element in line with the desired playing flag. Only issues a
/// call when the element currently disagrees.
pub fn reconcile_playback<M: MediaElement + ?Sized>(desired: bool, media: &mut M) -> MediaCommand {
    match (desired, media.is_paused()) {
        (true, true) => {
            media.play();
            MediaCommand::Play
        }
        (false, false) => {
            media.pause();
            MediaCommand::Pause
        }
        _ => MediaCommand::None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndedAction {
    Advance,
    Clear,
}

/// What to do once the active episode finishes on its own.
pub fn ended_action(state: &PlaybackState) -> EndedAction {
    if state.has_next() {
        EndedAction::Advance
    } else {
        EndedAction::Clear
    }
}

/// Move the playhead, returning the position actually applied so callers can
/// mirror it without waiting for the next time update.
pub fn seek<M: MediaElement + ?Sized>(media: &mut M, target: u32, duration: u32) -> u32 {
    let position = target.min(duration);
    media.set_current_time(position as f64);
    position
}

/// Rewind a freshly loaded episode; returns the position for the readout.
pub fn rewind_on_metadata<M: MediaElement + ?Sized>(media: &mut M) -> u32 {
    media.set_current_time(0.0);
    0
}

/// Whole-second position after a time update, `None` when the readout
/// already shows it.
pub fn progress_after_tick<M: MediaElement + ?Sized>(media: &M, shown: u32) -> Option<u32> {
    let seconds = whole_seconds(media.current_time());
    (seconds != shown).then_some(seconds)
}

#[cfg(target_arch = "wasm32")]
struct WebAudio(HtmlAudioElement);

#[cfg(target_arch = "wasm32")]
impl MediaElement for WebAudio {
    fn play(&mut self) {
        // A rejected play() (autoplay policy, bad source) is ignored; the element
        // stays paused and no pause event fires.
        let _ = self.0.play();
    }

    fn pause(&mut self) {
        let _ = self.0.pause();
    }

    fn is_paused(&self) -> bool {
        self.0.paused()
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn set_looping(&mut self, looping: bool) {
        self.0.set_loop(looping);
    }
}

/// Initialize the global audio element once
#[cfg(target_arch = "wasm32")]
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_autoplay(true);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController(progress: Signal<u32>, volume: f64) -> Element {
    let _ = (progress, volume);
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController(progress: Signal<u32>, volume: f64) -> Element {
    let store = use_player_store();
    let mut last_src = use_signal(|| None::<String>);

    // Wire element events back into the store
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        let runtime = Runtime::current();

        let runtime_play = runtime.clone();
        let play_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime_play.clone());
            store.set_playing_state(true);
        }) as Box<dyn FnMut()>);
        audio.set_onplay(Some(play_cb.as_ref().unchecked_ref()));
        play_cb.forget();

        let runtime_pause = runtime.clone();
        let pause_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime_pause.clone());
            store.set_playing_state(false);
        }) as Box<dyn FnMut()>);
        audio.set_onpause(Some(pause_cb.as_ref().unchecked_ref()));
        pause_cb.forget();

        let runtime_meta = runtime.clone();
        let meta_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime_meta.clone());
            if let Some(audio) = get_or_create_audio_element() {
                let mut progress = progress;
                progress.set(rewind_on_metadata(&mut WebAudio(audio)));
            }
        }) as Box<dyn FnMut()>);
        audio.set_onloadedmetadata(Some(meta_cb.as_ref().unchecked_ref()));
        meta_cb.forget();

        let runtime_time = runtime.clone();
        let time_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime_time.clone());
            if let Some(audio) = get_or_create_audio_element() {
                let mut progress = progress;
                let shown = *progress.peek();
                if let Some(seconds) = progress_after_tick(&WebAudio(audio), shown) {
                    progress.set(seconds);
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_ontimeupdate(Some(time_cb.as_ref().unchecked_ref()));
        time_cb.forget();

        let runtime_end = runtime.clone();
        let end_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime_end.clone());
            match store.with_peek(ended_action) {
                EndedAction::Advance => store.play_next(),
                EndedAction::Clear => store.clear(),
            }
        }) as Box<dyn FnMut()>);
        audio.set_onended(Some(end_cb.as_ref().unchecked_ref()));
        end_cb.forget();
    });

    // Swap the source when the active episode changes
    use_effect(move || {
        let src = store.current_episode().map(|episode| episode.media_url);
        if src == *last_src.peek() {
            return;
        }
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        let mut progress = progress;
        progress.set(0);
        match &src {
            Some(url) => {
                debug!(%url, "loading episode media");
                audio.set_src(url);
            }
            None => {
                debug!("unloading episode media");
                let _ = audio.pause();
                let _ = audio.remove_attribute("src");
                audio.load();
            }
        }
        last_src.set(src);
    });

    // Reconcile after every state transition
    use_effect(move || {
        let desired = store.is_playing() && store.current_episode().is_some();
        if let Some(audio) = get_or_create_audio_element() {
            let command = reconcile_playback(desired, &mut WebAudio(audio));
            if command != MediaCommand::None {
                debug!(?command, "reconciled media element");
            }
        }
    });

    use_effect(move || {
        let looping = store.is_looping();
        if let Some(audio) = get_or_create_audio_element() {
            WebAudio(audio).set_looping(looping);
        }
    });

    use_effect(move || {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(volume.clamp(0.0, 1.0));
        }
    });

    rsx! {}
}

/// Seek the page's audio element, returning the applied position.
#[cfg(target_arch = "wasm32")]
pub fn seek_to(target: u32, duration: u32) -> u32 {
    match get_or_create_audio_element() {
        Some(audio) => seek(&mut WebAudio(audio), target, duration),
        None => target.min(duration),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(target: u32, duration: u32) -> u32 {
    target.min(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Episode;

    #[derive(Default)]
    struct FakeMedia {
        paused: bool,
        time: f64,
        plays: usize,
        pauses: usize,
    }

    impl FakeMedia {
        fn paused() -> Self {
            Self {
                paused: true,
                ..Self::default()
            }
        }
    }

    impl MediaElement for FakeMedia {
        fn play(&mut self) {
            self.paused = false;
            self.plays += 1;
        }

        fn pause(&mut self) {
            self.paused = true;
            self.pauses += 1;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn current_time(&self) -> f64 {
            self.time
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.time = seconds;
        }

        fn set_looping(&mut self, _looping: bool) {}
    }

    fn episode(id: &str) -> Episode {
        Episode::new(id, id, 300, format!("https://cdn.test/{id}.mp3"))
    }

    #[test]
    fn reconcile_starts_paused_element() {
        let mut media = FakeMedia::paused();
        assert_eq!(reconcile_playback(true, &mut media), MediaCommand::Play);
        assert!(!media.is_paused());
        assert_eq!(media.plays, 1);
    }

    #[test]
    fn reconcile_pauses_running_element() {
        let mut media = FakeMedia::default();
        assert_eq!(reconcile_playback(false, &mut media), MediaCommand::Pause);
        assert!(media.is_paused());
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut media = FakeMedia::paused();
        reconcile_playback(true, &mut media);
        assert_eq!(reconcile_playback(true, &mut media), MediaCommand::None);
        assert_eq!(media.plays, 1);

        reconcile_playback(false, &mut media);
        assert_eq!(reconcile_playback(false, &mut media), MediaCommand::None);
        assert_eq!(media.pauses, 1);
    }

    #[test]
    fn ended_advances_while_next_exists() {
        let mut state = PlaybackState::new();
        state.play_queue(vec![episode("a"), episode("b")], 0);
        assert_eq!(ended_action(&state), EndedAction::Advance);
    }

    #[test]
    fn ended_on_last_episode_clears_to_empty_state() {
        let mut state = PlaybackState::new();
        state.play_queue(vec![episode("a"), episode("b")], 1);
        assert_eq!(ended_action(&state), EndedAction::Clear);

        state.clear();
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn ended_with_shuffle_always_advances() {
        let mut state = PlaybackState::new();
        state.play_single(episode("a"));
        state.toggle_shuffle();
        assert_eq!(ended_action(&state), EndedAction::Advance);
    }

    #[test]
    fn seek_moves_playhead_and_clamps() {
        let mut media = FakeMedia::paused();
        assert_eq!(seek(&mut media, 42, 300), 42);
        assert_eq!(media.current_time(), 42.0);

        assert_eq!(seek(&mut media, 999, 300), 300);
        assert_eq!(media.current_time(), 300.0);
    }

    #[test]
    fn metadata_rewinds_to_start() {
        let mut media = FakeMedia::paused();
        media.set_current_time(87.5);
        assert_eq!(rewind_on_metadata(&mut media), 0);
        assert_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn time_updates_floor_and_skip_unchanged_seconds() {
        let mut media = FakeMedia::default();
        media.set_current_time(12.7);
        assert_eq!(progress_after_tick(&media, 11), Some(12));
        assert_eq!(progress_after_tick(&media, 12), None);

        media.set_current_time(f64::NAN);
        assert_eq!(progress_after_tick(&media, 12), Some(0));
    }
}
