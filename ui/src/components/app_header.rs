use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Display name for a locale in the switcher.
fn language_name(code: &str) -> &str {
    match code {
        "en-US" => "English",
        "ar" => "العربية",
        other => other,
    }
}

/// Brand bar with the locale switcher.
///
/// The platform shell provides a `Signal<String>` holding the active language
/// code; changing the select updates the loader and that signal so every view
/// re-renders with fresh strings.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    // Re-render when the shell's language code changes.
    let _lang_marker = lang_code_ctx.as_ref().map(|code| code()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(language = %val, error = %err, "failed to switch language"),
        }
    };

    rsx! {
        header { id: "app-header", class: "app-header",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-mark", {t!("app-brand")} }
                    span { class: "app-header__brand-title", {t!("app-title")} }
                    span { class: "app-header__brand-subtitle", {t!("app-tagline")} }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs().into_iter() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang(),
                                    "{language_name(&code)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
