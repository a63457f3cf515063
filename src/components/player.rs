use dioxus::prelude::*;

use crate::components::{seek_to, use_player_store, AudioController, Icon, IconKind};
use crate::models::Episode;
use crate::playback::PlaybackState;
use crate::settings::WidgetSettings;
use crate::utils::{format_duration, whole_seconds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub disabled: bool,
    pub active: bool,
}

/// Visual state of every transport control, derived from playback state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlStates {
    pub shuffle: ControlState,
    pub previous: ControlState,
    pub play_pause: ControlState,
    pub next: ControlState,
    pub repeat: ControlState,
    pub show_pause: bool,
}

impl ControlStates {
    pub fn from_state(state: &PlaybackState) -> Self {
        let empty = state.current_episode().is_none();
        Self {
            shuffle: ControlState {
                disabled: empty || state.queue().len() <= 1,
                active: state.is_shuffling(),
            },
            previous: ControlState {
                disabled: empty || !state.has_previous(),
                active: false,
            },
            play_pause: ControlState {
                disabled: empty,
                active: false,
            },
            next: ControlState {
                disabled: empty || !state.has_next(),
                active: false,
            },
            repeat: ControlState {
                disabled: empty,
                active: state.is_looping(),
            },
            show_pause: state.is_playing(),
        }
    }
}

/// What the player panel renders. Only the active episode is copied out of
/// the queue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerView {
    pub controls: ControlStates,
    pub episode: Option<Episode>,
}

impl PlayerView {
    pub fn from_state(state: &PlaybackState) -> Self {
        Self {
            controls: ControlStates::from_state(state),
            episode: state.current_episode().cloned(),
        }
    }

    pub fn duration(&self) -> u32 {
        self.episode
            .as_ref()
            .map(|episode| episode.duration_seconds)
            .unwrap_or(0)
    }
}

#[component]
pub fn Player() -> Element {
    let store = use_player_store();
    let settings = use_context::<Signal<WidgetSettings>>();
    let mut progress = use_signal(|| 0u32);

    let view = store.read_with(PlayerView::from_state);
    let duration = view.duration();
    let PlayerView { controls, episode } = view;
    let settings = settings();

    let on_seek = move |target: u32| {
        let position = seek_to(target, duration);
        progress.set(position);
    };

    rsx! {
        div { class: "player",
            header { class: "player-header",
                Icon { kind: IconKind::Playing, class: "icon-md".to_string() }
                strong { "Playing now" }
            }

            {
                match &episode {
                    Some(episode) => rsx! {
                        NowPlaying { episode: episode.clone() }
                    },
                    None => rsx! {
                        div { class: "player-empty",
                            strong { "{settings.empty_message}" }
                        }
                    },
                }
            }

            footer { class: if episode.is_none() { "player-footer empty" } else { "player-footer" },
                div { class: "progress",
                    span { {format_duration(progress())} }
                    div { class: "slider",
                        if episode.is_some() {
                            SeekSlider { max: duration, value: progress(), on_change: on_seek }
                        } else {
                            div { class: "slider-empty" }
                        }
                    }
                    span { {format_duration(duration)} }
                }

                AudioController { progress, volume: settings.volume }

                div { class: "buttons",
                    ControlButton {
                        label: "Shuffle".to_string(),
                        state: controls.shuffle,
                        onclick: move |_| store.toggle_shuffle(),
                        Icon { kind: IconKind::Shuffle, class: "icon-md".to_string() }
                    }
                    ControlButton {
                        label: "Previous".to_string(),
                        state: controls.previous,
                        onclick: move |_| store.play_previous(),
                        Icon { kind: IconKind::Previous, class: "icon-md".to_string() }
                    }
                    ControlButton {
                        label: if controls.show_pause { "Pause".to_string() } else { "Play".to_string() },
                        state: controls.play_pause,
                        primary: true,
                        onclick: move |_| store.toggle_play(),
                        if controls.show_pause {
                            Icon { kind: IconKind::Pause, class: "icon-md".to_string() }
                        } else {
                            Icon { kind: IconKind::Play, class: "icon-md".to_string() }
                        }
                    }
                    ControlButton {
                        label: "Next".to_string(),
                        state: controls.next,
                        onclick: move |_| store.play_next(),
                        Icon { kind: IconKind::Next, class: "icon-md".to_string() }
                    }
                    ControlButton {
                        label: "Repeat".to_string(),
                        state: controls.repeat,
                        onclick: move |_| store.toggle_loop(),
                        Icon { kind: IconKind::Repeat, class: "icon-md".to_string() }
                    }
                }
            }
        }
    }
}

#[component]
fn NowPlaying(episode: Episode) -> Element {
    rsx! {
        div { class: "current-episode",
            if episode.thumbnail_url.is_empty() {
                div { class: "current-episode-art placeholder",
                    Icon { kind: IconKind::Music, class: "icon-xl".to_string() }
                }
            } else {
                img {
                    class: "current-episode-art",
                    src: "{episode.thumbnail_url}",
                    alt: "{episode.title}",
                    width: "592",
                    height: "592",
                }
            }
            strong { "{episode.title}" }
            span { "{episode.members}" }
        }
    }
}

#[component]
fn ControlButton(
    label: String,
    state: ControlState,
    #[props(default)] primary: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let mut class = String::from("control");
    if primary {
        class.push_str(" play-button");
    }
    if state.active {
        class.push_str(" is-active");
    }

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            title: "{label}",
            aria_label: "{label}",
            disabled: state.disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Range input over `[0, max]` seconds.
#[component]
fn SeekSlider(max: u32, value: u32, on_change: EventHandler<u32>) -> Element {
    rsx! {
        input {
            r#type: "range",
            class: "seek-slider",
            min: "0",
            max: "{max}",
            step: "1",
            value: "{value}",
            oninput: move |e: Event<FormData>| {
                if let Ok(seconds) = e.value().parse::<f64>() {
                    on_change.call(whole_seconds(seconds));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str) -> Episode {
        Episode::new(id, id, 120, format!("https://cdn.test/{id}.mp3"))
    }

    #[test]
    fn empty_state_disables_everything() {
        let controls = ControlStates::from_state(&PlaybackState::new());
        assert!(controls.shuffle.disabled);
        assert!(controls.previous.disabled);
        assert!(controls.play_pause.disabled);
        assert!(controls.next.disabled);
        assert!(controls.repeat.disabled);
    }

    #[test]
    fn single_episode_disables_shuffle_and_navigation() {
        let mut state = PlaybackState::new();
        state.play_single(episode("a"));
        let controls = ControlStates::from_state(&state);

        assert!(controls.shuffle.disabled);
        assert!(controls.previous.disabled);
        assert!(controls.next.disabled);
        assert!(!controls.play_pause.disabled);
        assert!(!controls.repeat.disabled);
        assert!(controls.show_pause);
    }

    #[test]
    fn middle_of_queue_enables_both_directions() {
        let mut state = PlaybackState::new();
        state.play_queue(vec![episode("a"), episode("b"), episode("c")], 1);
        let controls = ControlStates::from_state(&state);

        assert!(!controls.shuffle.disabled);
        assert!(!controls.previous.disabled);
        assert!(!controls.next.disabled);
    }

    #[test]
    fn toggles_mark_controls_active() {
        let mut state = PlaybackState::new();
        state.play_queue(vec![episode("a"), episode("b")], 1);
        state.toggle_shuffle();
        state.toggle_loop();
        state.toggle_play();
        let controls = ControlStates::from_state(&state);

        assert!(controls.shuffle.active);
        assert!(controls.repeat.active);
        assert!(!controls.show_pause);
        // shuffle always offers a next episode
        assert!(!controls.next.disabled);
    }

    #[test]
    fn cleared_queue_renders_as_empty() {
        let mut state = PlaybackState::new();
        state.play_queue(vec![episode("a"), episode("b")], 1);
        state.clear();
        let controls = ControlStates::from_state(&state);

        assert!(controls.play_pause.disabled);
        assert!(controls.next.disabled);
        // still playing as far as the flag goes
        assert!(controls.show_pause);
    }

    #[test]
    fn view_holds_only_the_active_episode() {
        let mut state = PlaybackState::new();
        state.play_queue(vec![episode("a"), episode("b"), episode("c")], 1);
        let view = PlayerView::from_state(&state);

        assert_eq!(view.episode.as_ref().map(|e| e.id.as_str()), Some("b"));
        assert_eq!(view.duration(), 120);
        assert_eq!(view.controls, ControlStates::from_state(&state));
    }

    #[test]
    fn empty_view_has_zero_duration() {
        let view = PlayerView::from_state(&PlaybackState::new());
        assert!(view.episode.is_none());
        assert_eq!(view.duration(), 0);
    }
}
