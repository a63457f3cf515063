use chrono::Local;
use dioxus::prelude::*;

use crate::components::{Icon, IconKind};
use crate::settings::WidgetSettings;
use crate::utils::format_header_date;

#[component]
pub fn Header() -> Element {
    let settings = use_context::<Signal<WidgetSettings>>();
    let settings = settings();
    let today = format_header_date(
        Local::now().date_naive(),
        &settings.date_pattern,
        &settings.date_locale,
    );

    rsx! {
        header { class: "header",
            div { class: "header-logo",
                Icon { kind: IconKind::Logo, class: "icon-lg".to_string() }
                span { "Podcastr" }
            }
            p { class: "header-tagline", "{settings.tagline}" }
            span { class: "header-date", "{today}" }
        }
    }
}
