use dioxus::prelude::*;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::components::{use_player_store_provider, EpisodeList, Header, Player};
use crate::settings::WidgetSettings;

const SETTINGS_JSON: &str = include_str!("../../assets/settings.json");
const EPISODES_JSON: &str = include_str!("../../assets/episodes.json");

fn load_catalog() -> Catalog {
    match Catalog::from_json(EPISODES_JSON) {
        Ok(catalog) => {
            info!(episodes = catalog.episodes().len(), "episode catalog loaded");
            catalog
        }
        Err(err) => {
            error!(%err, "failed to load episode catalog");
            Catalog::default()
        }
    }
}

#[component]
pub fn AppShell() -> Element {
    let settings = use_signal(|| WidgetSettings::from_json_or_default(SETTINGS_JSON));
    let catalog = use_signal(load_catalog);

    use_context_provider(|| settings);
    use_context_provider(|| catalog);
    use_player_store_provider();

    rsx! {
        div { class: "wrapper",
            main {
                Header {}
                EpisodeList {}
            }
            Player {}
        }
    }
}
