use dioxus::prelude::*;

use crate::catalog::Catalog;
use crate::components::{use_player_store, Icon, IconKind};
use crate::utils::format_duration;

/// Catalog listing. Picking a row loads the whole catalog as the queue.
#[component]
pub fn EpisodeList() -> Element {
    let store = use_player_store();
    let catalog = use_context::<Signal<Catalog>>();
    let active_id = store.current_episode().map(|episode| episode.id);
    if catalog.read().is_empty() {
        return rsx! {
            section { class: "episode-list",
                p { class: "episode-list-empty", "No episodes available" }
            }
        };
    }
    let episodes = catalog.read().episodes().to_vec();

    rsx! {
        section { class: "episode-list",
            h2 { "Latest episodes" }
            ul {
                for (index, episode) in episodes.iter().cloned().enumerate() {
                    li {
                        key: "{episode.id}",
                        class: if active_id.as_deref() == Some(episode.id.as_str()) { "episode-row is-current" } else { "episode-row" },
                        button {
                            r#type: "button",
                            class: "episode-select",
                            onclick: move |_| store.play_queue(catalog.read().to_queue(), index),
                            if episode.thumbnail_url.is_empty() {
                                div { class: "episode-thumb placeholder",
                                    Icon { kind: IconKind::Music, class: "icon-md".to_string() }
                                }
                            } else {
                                img {
                                    class: "episode-thumb",
                                    src: "{episode.thumbnail_url}",
                                    alt: "{episode.title}",
                                    loading: "lazy",
                                }
                            }
                            div { class: "episode-details",
                                strong { "{episode.title}" }
                                p { "{episode.members}" }
                                span { class: "episode-meta",
                                    if let Some(published) = episode.published_at.clone() {
                                        "{published} · "
                                    }
                                    {format_duration(episode.duration_seconds)}
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "episode-play-single",
                            title: "Play only this episode",
                            onclick: {
                                let episode = episode.clone();
                                move |_| store.play_single(episode.clone())
                            },
                            Icon { kind: IconKind::Play, class: "icon-sm".to_string() }
                        }
                    }
                }
            }
        }
    }
}
