// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{asset_form, keys, App, Message};
use crate::config;
use crate::overlay::{Change, ClickTarget, OverlayEvent, OverlayKind, Transition};
use crate::ui::notifications::Notification;
use crate::wizard;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Overlay(event) => dispatch_overlay(app, &event),
        Message::Notification(message) => app.notifications.handle_message(&message),
        Message::Tick(now) => {
            app.notifications.tick(now);
        }
        Message::Wizard(message) => handle_wizard(app, message),
        Message::AssetForm(message) => handle_asset_form(app, message),
        Message::SidebarItem(item) => {
            dismiss_floating(app);
            app.sidebar.click_item(&item);
        }
        Message::CloseSubmenu(panel) => {
            dismiss_floating(app);
            app.sidebar.close(&panel);
        }
        Message::TabSelected(tab) => {
            dismiss_floating(app);
            app.tabs.activate(&tab);
        }
        Message::AccordionToggled(item) => {
            dismiss_floating(app);
            app.history.toggle(&item);
        }
        Message::CollapseToggled(target) => {
            dismiss_floating(app);
            app.notes.toggle(&target);
        }
        Message::ActionSelected(action) => {
            app.overlays
                .close(OverlayKind::Dropdown, keys::ACTIONS_DROPDOWN);
            app.notifications.push(
                Notification::info("toast-action-started")
                    .with_arg("action", app.i18n.tr(action.i18n_key())),
            );
        }
        Message::LanguageSelected(locale) => {
            app.overlays.close(OverlayKind::Dropdown, keys::USER_DROPDOWN);
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
            persist_config(app);
        }
        Message::ToggleTheme => {
            dismiss_floating(app);
            app.theme_mode = app.theme_mode.toggled();
            app.config.general.theme_mode = app.theme_mode;
            persist_config(app);
        }
        Message::WindowResized(size) => app.window_size = size,
    }
    Task::none()
}

fn dispatch_overlay(app: &mut App, event: &OverlayEvent) {
    if let OverlayEvent::ToggleClicked(toggle) = event {
        let blocking = app
            .overlays
            .toggled_by(toggle)
            .any(|region| region.kind().locks_scroll());
        if blocking {
            dismiss_floating(app);
        }
    }
    let transitions = app.overlays.dispatch(event);
    apply_transitions(app, &transitions);
}

/// Buttons capture the press, so page-level buttons count as an outside click.
fn dismiss_floating(app: &mut App) {
    dispatch_overlay(app, &OverlayEvent::Click(ClickTarget::Outside));
}

fn apply_transitions(app: &mut App, transitions: &[Transition]) {
    for transition in transitions {
        log::debug!(
            "{:?} {} {:?}",
            transition.kind,
            transition.key,
            transition.change
        );
        if transition.change != Change::Opened {
            continue;
        }
        match transition.key.as_str() {
            keys::WIZARD_MODAL => app.wizard.reset(),
            keys::ASSET_MODAL => app.asset_form = asset_form::State::new(),
            _ => {}
        }
    }
}

fn close_modal(app: &mut App, key: &str) {
    let transitions = app.overlays.close(OverlayKind::Modal, key);
    apply_transitions(app, &transitions);
}

fn handle_wizard(app: &mut App, message: wizard::Message) {
    match wizard::update(&mut app.wizard, message) {
        wizard::Event::None => {}
        wizard::Event::Rejected(error) => {
            log::debug!("wizard step rejected: {error}");
            app.notifications
                .push(Notification::danger(error.i18n_key()));
        }
        wizard::Event::Submitted(request) => {
            match request.body() {
                Ok(body) => {
                    log::info!("{} {} {body}", request.method, request.path);
                    app.notifications
                        .push(Notification::success("toast-plan-created"));
                }
                Err(error) => {
                    log::error!("failed to encode plan: {error}");
                    app.notifications
                        .push(Notification::danger("toast-plan-encode-failed"));
                }
            }
            app.wizard.reset();
            close_modal(app, keys::WIZARD_MODAL);
        }
        wizard::Event::Cancelled => {
            app.wizard.reset();
            close_modal(app, keys::WIZARD_MODAL);
        }
    }
}

fn handle_asset_form(app: &mut App, message: asset_form::Message) {
    match asset_form::update(&mut app.asset_form, message) {
        asset_form::Event::None => {}
        asset_form::Event::Saved(values) => {
            let name = values.get("name").cloned().unwrap_or_default();
            log::info!("asset saved: {name}");
            app.notifications
                .push(Notification::success("toast-asset-saved").with_arg("name", name));
            close_modal(app, keys::ASSET_MODAL);
        }
        asset_form::Event::Invalid(count) => {
            log::debug!("asset form has {count} invalid field(s)");
        }
        asset_form::Event::Cancelled => close_modal(app, keys::ASSET_MODAL),
    }
}

fn persist_config(app: &mut App) {
    if cfg!(test) {
        return;
    }
    if let Err(error) = config::save(&app.config) {
        log::warn!("failed to save config: {error}");
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::app::Action;
    use crate::overlay::{BackdropId, ToggleId};
    use crate::ui::theming::ThemeMode;

    fn send(app: &mut App, message: Message) {
        let _ = update(app, message);
    }

    fn toggle(app: &mut App, id: &str) {
        send(app, Message::Overlay(OverlayEvent::ToggleClicked(ToggleId::new(id))));
    }

    #[test]
    fn toggle_button_opens_modal_and_locks_scroll() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_NEW_ASSET);
        assert!(app.overlays.is_open(keys::ASSET_MODAL));
        assert!(app.overlays.is_scroll_locked());
    }

    #[test]
    fn backdrop_click_closes_modal() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_NEW_PLAN);
        send(
            &mut app,
            Message::Overlay(OverlayEvent::BackdropClicked(BackdropId::new(keys::MODAL_BACKDROP))),
        );
        assert!(!app.overlays.is_open(keys::WIZARD_MODAL));
        assert!(!app.overlays.is_scroll_locked());
    }

    #[test]
    fn opening_second_dropdown_closes_first() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_ACTIONS);
        toggle(&mut app, keys::BTN_USER);
        assert!(!app.overlays.is_open(keys::ACTIONS_DROPDOWN));
        assert!(app.overlays.is_open(keys::USER_DROPDOWN));
    }

    #[test]
    fn page_buttons_dismiss_open_dropdown() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_HELP);
        send(&mut app, Message::TabSelected(keys::TAB_HISTORY.to_string()));
        assert!(!app.overlays.is_open(keys::HELP_POPOVER));
        assert_eq!(app.tabs.active(), Some(keys::TAB_HISTORY));
    }

    #[test]
    fn action_selection_closes_dropdown_and_notifies() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_ACTIONS);
        send(&mut app, Message::ActionSelected(Action::ExportCsv));
        assert!(!app.overlays.is_open(keys::ACTIONS_DROPDOWN));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn wizard_rejection_shows_danger_toast() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_NEW_PLAN);
        send(&mut app, Message::Wizard(wizard::Message::Next));
        assert_eq!(app.notifications.visible_count(), 1);
        assert_eq!(app.wizard.step(), wizard::Step::Asset);
        assert!(app.overlays.is_open(keys::WIZARD_MODAL));
    }

    #[test]
    fn wizard_cancel_closes_modal() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_NEW_PLAN);
        send(&mut app, Message::Wizard(wizard::Message::Cancel));
        assert!(!app.overlays.is_open(keys::WIZARD_MODAL));
        assert!(!app.overlays.is_scroll_locked());
    }

    #[test]
    fn saved_asset_closes_modal() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_NEW_ASSET);
        for (field, value) in [("name", "Compresor"), ("code", "COM-07")] {
            send(
                &mut app,
                Message::AssetForm(asset_form::Message::FieldChanged(field, value.to_string())),
            );
        }
        send(&mut app, Message::AssetForm(asset_form::Message::Submit));
        assert!(!app.overlays.is_open(keys::ASSET_MODAL));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn theme_button_closes_open_dropdown() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_ACTIONS);
        send(&mut app, Message::ToggleTheme);
        assert!(!app.overlays.is_open(keys::ACTIONS_DROPDOWN));
    }

    #[test]
    fn modal_and_offcanvas_toggles_close_floating_panels() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_HELP);
        toggle(&mut app, keys::BTN_NEW_ASSET);
        assert!(!app.overlays.is_open(keys::HELP_POPOVER));
        assert!(app.overlays.is_open(keys::ASSET_MODAL));

        send(&mut app, Message::Overlay(OverlayEvent::Escape));
        toggle(&mut app, keys::BTN_USER);
        toggle(&mut app, keys::BTN_FILTERS);
        assert!(!app.overlays.is_open(keys::USER_DROPDOWN));
        assert!(app.overlays.is_open(keys::FILTERS));
    }

    #[test]
    fn dropdown_toggle_keeps_popover_rule_intact() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_HELP);
        toggle(&mut app, keys::BTN_ACTIONS);
        assert!(app.overlays.is_open(keys::HELP_POPOVER));
        assert!(app.overlays.is_open(keys::ACTIONS_DROPDOWN));
    }

    #[test]
    fn reopened_asset_modal_starts_with_empty_form() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_NEW_ASSET);
        send(
            &mut app,
            Message::AssetForm(asset_form::Message::FieldChanged("name", "ab".to_string())),
        );
        send(&mut app, Message::AssetForm(asset_form::Message::Submit));
        assert!(app.asset_form.error("name").is_some());

        send(&mut app, Message::Overlay(OverlayEvent::Escape));
        toggle(&mut app, keys::BTN_NEW_ASSET);
        assert_eq!(app.asset_form.value("name"), "");
        assert!(app.asset_form.error("name").is_none());
    }

    #[test]
    fn modal_backdrop_click_leaves_other_modal_closed() {
        let mut app = test_app();
        toggle(&mut app, keys::BTN_NEW_ASSET);
        send(
            &mut app,
            Message::Overlay(OverlayEvent::BackdropClicked(BackdropId::new(keys::MODAL_BACKDROP))),
        );
        assert!(!app.overlays.is_open(keys::ASSET_MODAL));
        assert!(!app.overlays.is_open(keys::WIZARD_MODAL));
        assert!(!app.overlays.is_backdrop_visible(keys::MODAL_BACKDROP));
    }

    #[test]
    fn theme_toggle_updates_config() {
        let mut app = test_app();
        let before = app.theme_mode;
        send(&mut app, Message::ToggleTheme);
        assert_ne!(app.theme_mode, before);
        assert_eq!(app.config.general.theme_mode, app.theme_mode);
        assert!(matches!(app.theme_mode, ThemeMode::Light | ThemeMode::Dark));
    }

    #[test]
    fn hover_shows_and_hides_tooltip() {
        let mut app = test_app();
        let key = crate::overlay::OverlayKey::new(keys::THEME_TOOLTIP);
        send(&mut app, Message::Overlay(OverlayEvent::HoverStart(key.clone())));
        assert!(app.overlays.is_open(keys::THEME_TOOLTIP));
        send(&mut app, Message::Overlay(OverlayEvent::HoverEnd(key)));
        assert!(!app.overlays.is_open(keys::THEME_TOOLTIP));
    }
}
