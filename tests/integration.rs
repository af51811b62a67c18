// SPDX-License-Identifier: MPL-2.0
use maintech_ui::config::{self, Config, CONFIG_LOAD_WARNING_KEY};
use maintech_ui::forms::{FieldError, FieldRules, Form};
use maintech_ui::i18n::fluent::I18n;
use maintech_ui::ui::theming::ThemeMode;
use std::collections::HashMap;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("failed to write english config");
    let loaded = config::load_from_path(&config_path).expect("failed to load english config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut spanish = Config::default();
    spanish.general.language = Some("es".to_string());
    config::save_to_path(&spanish, &config_path).expect("failed to write spanish config");
    let loaded = config::load_from_path(&config_path).expect("failed to load spanish config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "es");
    assert_eq!(i18n.tr("wizard-next"), "Siguiente");
}

#[test]
fn preferences_survive_a_save_and_reload() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Dark;
    saved.notifications.duration_ms = 8000;
    saved.notifications.max_visible = 5;

    config::save_with_override(&saved, Some(dir.path().to_path_buf())).expect("save");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, saved);
    assert_eq!(loaded.notifications.duration(), Duration::from_millis(8000));
}

#[test]
fn unreadable_config_falls_back_with_warning_key() {
    let dir = tempdir().expect("failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage=").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert!(!i18n.tr(CONFIG_LOAD_WARNING_KEY).starts_with("MISSING"));
}

#[test]
fn validation_messages_are_translated() {
    let form = Form::new()
        .field("name", FieldRules::text().required().min_length(3))
        .field("contact", FieldRules::email());

    let mut values = HashMap::new();
    values.insert("name".to_string(), "ab".to_string());
    values.insert("contact".to_string(), "tecnico@".to_string());

    let errors = form.validate(&values).expect_err("form should be invalid");
    assert_eq!(errors.len(), 2);

    let i18n = I18n::new(Some("es".to_string()), &Config::default());
    let messages: Vec<String> = errors.iter().map(|(_, error)| error.message(&i18n)).collect();
    assert!(messages.contains(&"Mínimo 3 caracteres".to_string()));
    assert!(messages.contains(&FieldError::Email.message(&i18n)));
}
