#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::sync::Arc;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::info;

use ui::components::AppHeader;
use ui::core::config::DashboardConfig;
use ui::data::DatasetCache;
use ui::report::FilterSelection;
use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let config = DashboardConfig::from_user_config();
    // One cache per process; every window reads the same table.
    let cache = Arc::new(DatasetCache::new(config.dataset_path.clone()));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Labdash – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .with_context(cache)
        .with_context(config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("labdash-desktop was built without the `desktop` feature; nothing to launch");
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Filters live above the language-keyed subtree so a locale switch keeps them.
    let selection = use_signal(FilterSelection::all);

    use_hook(|| {
        let cache = consume_context::<Arc<DatasetCache>>();
        info!(source = %cache.source().display(), "dashboard window opened");
    });

    let lang = lang_code();
    let dir = ui::i18n::direction(&lang);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div { key: "{lang}", dir: "{dir}", lang: "{lang}",
            AppHeader {}
            Dashboard { selection }
        }
    }
}
