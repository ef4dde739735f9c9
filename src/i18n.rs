use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use yuuka::derive_struct;

// Include translation TOML at compile time
const EN_US_TOML: &str = include_str!("../res/i18n/en_us.toml");
const ZH_CHS_TOML: &str = include_str!("../res/i18n/zh_chs.toml");

derive_struct! {
    #[derive(PartialEq, Serialize, Deserialize)]
    pub Lang {
        title: String = "title".to_string(),
        subtitle: String = "subtitle".to_string(),
        landing_prompt: String = "landing_prompt".to_string(),
        landing_footer: String = "landing_footer".to_string(),
        // camera screen
        camera_title: String = "camera_title".to_string(),
        camera_permission_title: String = "camera_permission_title".to_string(),
        camera_permission_body: String = "camera_permission_body".to_string(),
        button_deny: String = "button_deny".to_string(),
        button_allow: String = "button_allow".to_string(),
        camera_preview: String = "camera_preview".to_string(),
        camera_processing: String = "camera_processing".to_string(),
        camera_denied_title: String = "camera_denied_title".to_string(),
        camera_denied_body: String = "camera_denied_body".to_string(),
        button_try_again: String = "button_try_again".to_string(),
        // results screen
        results_title: String = "results_title".to_string(),
        results_subtitle: String = "results_subtitle".to_string(),
        results_instructions: String = "results_instructions".to_string(),
        results_category: String = "results_category".to_string(),
        results_category_note: String = "results_category_note".to_string(),
        results_confidence: String = "results_confidence".to_string(),
        results_confidence_note: String = "results_confidence_note".to_string(),
        button_finish: String = "button_finish".to_string(),
        // finish screen
        finish_title: String = "finish_title".to_string(),
        finish_thanks: String = "finish_thanks".to_string(),
        finish_redirecting: String = "finish_redirecting".to_string(),
        // bottom bar hints
        hint_start: String = "hint_start".to_string(),
        hint_choose: String = "hint_choose".to_string(),
        hint_confirm: String = "hint_confirm".to_string(),
        hint_allow_deny: String = "hint_allow_deny".to_string(),
        hint_retry: String = "hint_retry".to_string(),
        hint_finish: String = "hint_finish".to_string(),
        hint_wait: String = "hint_wait".to_string(),
        hint_abort: String = "hint_abort".to_string(),
        hint_quit: String = "hint_quit".to_string(),
        hint_clear_error: String = "hint_clear_error".to_string(),
    }
}

static LANG_SELECTED: OnceCell<Lang> = OnceCell::new();
static LOCALE: OnceCell<String> = OnceCell::new();

const AVAILABLE_LOCALES: [&str; 2] = ["en_us", "zh_chs"];

fn parse_toml_to_lang(content: &str) -> Lang {
    match toml::from_str::<Lang>(content) {
        Ok(l) => l,
        Err(e) => {
            log::warn!(
                "i18n: failed to parse toml: {}\ncontent preview: {}",
                e,
                &content.chars().take(200).collect::<String>()
            );
            // Fallback: return the default Lang (keys as values)
            Lang::default()
        }
    }
}

fn lang_for_locale(locale: &str) -> Lang {
    match locale {
        "zh_chs" => parse_toml_to_lang(ZH_CHS_TOML),
        _ => parse_toml_to_lang(EN_US_TOML),
    }
}

/// Map a list of user preferences (`zh_CN.UTF-8`, `en`, ...) to one of the bundled locales.
pub fn select_locale<S: AsRef<str>>(prefs: &[S]) -> &'static str {
    for pref in prefs {
        let pref = pref.as_ref().to_lowercase();
        if pref.contains("zh") {
            return "zh_chs";
        }
        if pref.starts_with("en") {
            return "en_us";
        }
    }
    AVAILABLE_LOCALES[0]
}

/// Return a reference to the currently selected `Lang`.
/// Callers can access fields directly, e.g. `i18n::lang().title`.
pub fn lang() -> &'static Lang {
    LANG_SELECTED.get_or_init(|| lang_for_locale(AVAILABLE_LOCALES[0]))
}

pub fn locale() -> &'static str {
    LOCALE.get().map(|s| s.as_str()).unwrap_or(AVAILABLE_LOCALES[0])
}

/// Pick the UI language once at startup. An explicit `preferred` locale wins
/// over the environment (`LANGUAGE`, `LC_ALL`, `LANG`).
pub fn init_i18n(preferred: Option<&str>) {
    let mut prefs: Vec<String> = Vec::new();
    if let Some(p) = preferred {
        prefs.push(p.to_string());
    }
    if let Ok(v) = std::env::var("LANGUAGE") {
        prefs.extend(v.split(':').map(|s| s.to_string()));
    }
    if let Ok(v) = std::env::var("LC_ALL") {
        prefs.push(v);
    }
    if let Ok(v) = std::env::var("LANG") {
        prefs.push(v);
    }

    let chosen = select_locale(&prefs);
    if LANG_SELECTED.set(lang_for_locale(chosen)).is_err() {
        log::warn!("i18n: language already initialized, keeping {}", locale());
        return;
    }
    LOCALE.set(chosen.to_string()).ok();

    let user = whoami::username();
    log::info!("i18n: user={} locale={}", user, locale());
}
