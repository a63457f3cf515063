use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod catalog;
mod components;
mod models;
mod playback;
mod settings;
mod utils;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Title { "Podcastr" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
