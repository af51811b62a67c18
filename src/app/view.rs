// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a header, a sidebar and a tabbed main area. Overlays are
//! stacked on top in a fixed order: floating panels, the filters offcanvas,
//! modals and finally toasts. While the scroll lock is engaged the main area
//! is rendered without its scrollable.

use super::{asset_form, keys, Action, App, Message};
use crate::overlay::{place, BackdropId, ClickTarget, OverlayEvent, OverlayKey, Side, ToggleId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::wizard;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, text, Column, Row,
    Space, Stack, Text,
};
use iced::{Element, Length, Padding, Point, Rectangle, Size, Theme};

pub const HEADER_HEIGHT: f32 = 56.0;
pub const HEADER_BUTTON_WIDTH: f32 = 104.0;
const TOOLTIP_SIZE: Size = Size::new(180.0, 32.0);
const POPOVER_HEIGHT: f32 = 120.0;
const NOTES_TARGET: &str = "overview-notes";

/// Header slots, counted from the right edge of the window.
mod slot {
    pub const USER: usize = 0;
    pub const THEME: usize = 1;
    pub const HELP: usize = 2;
    pub const ACTIONS: usize = 3;
}

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Renders the whole window.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let base = column![
        view_header(app),
        row![view_sidebar(app), view_main(app)].height(Length::Fill)
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers: Vec<Element<'_, Message>> = vec![base.into()];
    layers.extend(view_floating(app));
    if app.overlays.is_backdrop_visible(keys::FILTERS_BACKDROP) {
        layers.extend(view_offcanvas(app));
    }
    if app.overlays.is_backdrop_visible(keys::MODAL_BACKDROP) {
        layers.extend(view_modals(app));
    }
    layers.push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toggle_message(toggle: &str) -> Message {
    Message::Overlay(OverlayEvent::ToggleClicked(ToggleId::new(toggle)))
}

fn header_button<'a>(label: String, message: Message, style: ButtonStyle) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .width(HEADER_BUTTON_WIDTH)
        .height(sizing::BUTTON_HEIGHT)
        .on_press(message)
        .style(style)
        .into()
}

fn view_header(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;
    let toggle = |label_key, toggle_id, overlay| overlay_toggle(app, label_key, toggle_id, overlay);

    let theme_label = if app.theme_mode.is_dark() {
        "button-theme-light"
    } else {
        "button-theme-dark"
    };
    let tooltip_key = OverlayKey::new(keys::THEME_TOOLTIP);
    let theme_button = mouse_area(header_button(
        i18n.tr(theme_label),
        Message::ToggleTheme,
        styles::button::unselected,
    ))
    .on_enter(Message::Overlay(OverlayEvent::HoverStart(tooltip_key.clone())))
    .on_exit(Message::Overlay(OverlayEvent::HoverEnd(tooltip_key)));

    let header = row![
        Text::new(i18n.tr("app-title")).size(typography::TITLE_MD),
        Space::new().width(Length::Fill),
        header_button(
            i18n.tr("button-new-asset"),
            toggle_message(keys::BTN_NEW_ASSET),
            styles::button::primary,
        ),
        header_button(
            i18n.tr("button-new-plan"),
            toggle_message(keys::BTN_NEW_PLAN),
            styles::button::primary,
        ),
        toggle("button-filters", keys::BTN_FILTERS, keys::FILTERS),
        toggle("button-actions", keys::BTN_ACTIONS, keys::ACTIONS_DROPDOWN),
        toggle("button-help", keys::BTN_HELP, keys::HELP_POPOVER),
        theme_button,
        toggle("button-user", keys::BTN_USER, keys::USER_DROPDOWN),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center)
    .padding([0.0, spacing::MD])
    .height(HEADER_HEIGHT);

    header.into()
}

/// Header button that toggles `overlay`, highlighted while it is open.
fn overlay_toggle<'a>(
    app: &App,
    label_key: &str,
    toggle_id: &str,
    overlay: &str,
) -> Element<'a, Message> {
    let style: ButtonStyle = if app.overlays.is_open(overlay) {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    header_button(app.i18n.tr(label_key), toggle_message(toggle_id), style)
}

fn view_sidebar(app: &App) -> Element<'_, Message> {
    let items = app.sidebar.items().fold(
        Column::new().spacing(spacing::XXS).padding(spacing::SM),
        |col, (item, _panel)| {
            let style: ButtonStyle = if app.sidebar.active_item() == Some(item) {
                styles::button::selected
            } else {
                styles::button::menu_item
            };
            col.push(
                button(text(app.i18n.tr(&format!("sidebar-{item}"))).size(typography::BODY))
                    .width(Length::Fill)
                    .on_press(Message::SidebarItem(item.to_string()))
                    .style(style),
            )
        },
    );

    let sidebar = container(items)
        .width(sizing::SIDEBAR_WIDTH)
        .height(Length::Fill)
        .style(styles::overlay::sidebar);

    match app.sidebar.expanded() {
        Some(panel) => row![sidebar, view_submenu(app, panel)].into(),
        None => sidebar.into(),
    }
}

fn submenu_entries(panel: &str) -> &'static [&'static str] {
    match panel {
        "maintenance-panel" => &["submenu-preventive", "submenu-corrective", "submenu-calendar"],
        "reports-panel" => &["submenu-costs", "submenu-availability"],
        _ => &[],
    }
}

fn view_submenu<'a>(app: &'a App, panel: &'a str) -> Element<'a, Message> {
    let title = row![
        Text::new(app.i18n.tr(&format!("submenu-title-{panel}"))).size(typography::TITLE_SM),
        Space::new().width(Length::Fill),
        button(text("×").size(typography::BODY))
            .on_press(Message::CloseSubmenu(panel.to_string()))
            .style(styles::button::menu_item),
    ]
    .align_y(Vertical::Center);

    let entries = submenu_entries(panel)
        .iter()
        .fold(Column::new().spacing(spacing::XS), |col, key| {
            col.push(Text::new(app.i18n.tr(key)).size(typography::BODY))
        });

    container(column![title, entries].spacing(spacing::SM))
        .width(sizing::SUBMENU_WIDTH)
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(styles::overlay::sidebar)
        .into()
}

fn view_main(app: &App) -> Element<'_, Message> {
    let tabs = app
        .tabs
        .tabs()
        .iter()
        .fold(Row::new().spacing(spacing::XS), |tabs, tab| {
            let style: ButtonStyle = if app.tabs.active() == Some(tab.as_str()) {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            tabs.push(
                button(text(app.i18n.tr(&format!("tab-{tab}"))).size(typography::BODY))
                    .on_press(Message::TabSelected(tab.clone()))
                    .style(style),
            )
        });

    let pane = match app.tabs.active() {
        Some(keys::TAB_HISTORY) => view_history(app),
        _ => view_overview(app),
    };

    let content = column![tabs, pane]
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill);

    if app.overlays.is_scroll_locked() {
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn view_overview(app: &App) -> Element<'_, Message> {
    let shown = app.notes.is_shown(NOTES_TARGET);
    let toggle_label = if shown {
        "overview-notes-hide"
    } else {
        "overview-notes-show"
    };

    let mut pane = column![
        Text::new(app.i18n.tr("overview-title")).size(typography::TITLE_SM),
        Text::new(app.i18n.tr("overview-body")).size(typography::BODY),
        button(text(app.i18n.tr(toggle_label)).size(typography::BODY))
            .on_press(Message::CollapseToggled(NOTES_TARGET.to_string()))
            .style(styles::button::unselected),
    ]
    .spacing(spacing::SM);

    if shown {
        pane = pane.push(Text::new(app.i18n.tr("overview-notes")).size(typography::BODY));
    }
    pane.into()
}

fn view_history(app: &App) -> Element<'_, Message> {
    app.history
        .items()
        .iter()
        .fold(Column::new().spacing(spacing::XS), |col, item| {
            let open = app.history.is_open(item);
            let header = button(
                text(app.i18n.tr_with_args("history-item-title", &[("id", item.as_str())]))
                    .size(typography::BODY),
            )
            .width(Length::Fill)
            .on_press(Message::AccordionToggled(item.clone()))
            .style(if open {
                styles::button::selected
            } else {
                styles::button::unselected
            });

            let col = col.push(header);
            if open {
                col.push(
                    container(
                        Text::new(
                            app.i18n
                                .tr_with_args("history-item-body", &[("id", item.as_str())]),
                        )
                        .size(typography::BODY),
                    )
                    .padding(spacing::SM),
                )
            } else {
                col
            }
        })
        .into()
}

// =============================================================================
// Overlay layers
// =============================================================================

/// Bounds of the header button in `slot`, counted from the right edge.
fn header_anchor(window: Size, slot: usize) -> Rectangle {
    let step = HEADER_BUTTON_WIDTH + spacing::XS;
    let x = window.width - spacing::MD - HEADER_BUTTON_WIDTH - slot as f32 * step;
    let y = (HEADER_HEIGHT - sizing::BUTTON_HEIGHT) / 2.0;
    Rectangle::new(
        Point::new(x, y),
        Size::new(HEADER_BUTTON_WIDTH, sizing::BUTTON_HEIGHT),
    )
}

/// Keeps an element of `size` inside the window.
fn clamp_origin(origin: Point, size: Size, window: Size) -> Point {
    Point::new(
        origin.x.clamp(0.0, (window.width - size.width).max(0.0)),
        origin.y.clamp(0.0, (window.height - size.height).max(0.0)),
    )
}

fn positioned<'a>(
    content: Element<'a, Message>,
    anchor: Rectangle,
    size: Size,
    side: Side,
    window: Size,
) -> Element<'a, Message> {
    let origin = clamp_origin(place(anchor, size, side), size, window);
    container(content)
        .padding(Padding {
            top: origin.y,
            right: 0.0,
            bottom: 0.0,
            left: origin.x,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Wraps a floating panel so presses on it count as inside clicks.
fn floating_panel<'a>(key: &str, content: Column<'a, Message>, width: f32) -> Element<'a, Message> {
    mouse_area(
        container(content)
            .width(width)
            .padding(spacing::XS)
            .style(styles::overlay::floating),
    )
    .on_press(Message::Overlay(OverlayEvent::Click(ClickTarget::Inside(
        OverlayKey::new(key),
    ))))
    .into()
}

fn dropdown_size(entries: usize) -> Size {
    Size::new(
        sizing::DROPDOWN_WIDTH,
        entries as f32 * (sizing::BUTTON_HEIGHT + spacing::XXS) + 2.0 * spacing::XS,
    )
}

fn view_floating(app: &App) -> Vec<Element<'_, Message>> {
    let window = app.window_size;
    let mut layers = Vec::new();

    if app.overlays.is_open(keys::ACTIONS_DROPDOWN) {
        let entries = Action::ALL
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |col, &action| {
                col.push(
                    button(text(app.i18n.tr(action.i18n_key())).size(typography::BODY))
                        .width(Length::Fill)
                        .on_press(Message::ActionSelected(action))
                        .style(styles::button::menu_item),
                )
            });
        layers.push(positioned(
            floating_panel(keys::ACTIONS_DROPDOWN, entries, sizing::DROPDOWN_WIDTH),
            header_anchor(window, slot::ACTIONS),
            dropdown_size(Action::ALL.len()),
            Side::Bottom,
            window,
        ));
    }

    if app.overlays.is_open(keys::USER_DROPDOWN) {
        let current = app.i18n.current_locale();
        let entries = app.i18n.available_locales.iter().fold(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(app.i18n.tr("user-menu-language")).size(typography::CAPTION)),
            |col, locale| {
                let style: ButtonStyle = if locale == current {
                    styles::button::selected
                } else {
                    styles::button::menu_item
                };
                col.push(
                    button(
                        text(app.i18n.tr(&format!("language-name-{locale}")))
                            .size(typography::BODY),
                    )
                    .width(Length::Fill)
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .style(style),
                )
            },
        );
        layers.push(positioned(
            floating_panel(keys::USER_DROPDOWN, entries, sizing::DROPDOWN_WIDTH),
            header_anchor(window, slot::USER),
            dropdown_size(app.i18n.available_locales.len() + 1),
            Side::Bottom,
            window,
        ));
    }

    if app.overlays.is_open(keys::HELP_POPOVER) {
        let body = column![
            Text::new(app.i18n.tr("help-popover-title")).size(typography::TITLE_SM),
            Text::new(app.i18n.tr("help-popover-body")).size(typography::BODY),
        ]
        .spacing(spacing::XS);
        layers.push(positioned(
            floating_panel(keys::HELP_POPOVER, body, sizing::POPOVER_WIDTH),
            header_anchor(window, slot::HELP),
            Size::new(sizing::POPOVER_WIDTH, POPOVER_HEIGHT),
            Side::Bottom,
            window,
        ));
    }

    if app.overlays.is_open(keys::THEME_TOOLTIP) {
        let tip = container(Text::new(app.i18n.tr("theme-tooltip")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::tooltip);
        layers.push(positioned(
            tip.into(),
            header_anchor(window, slot::THEME),
            TOOLTIP_SIZE,
            Side::Left,
            window,
        ));
    }

    layers
}

/// Full-window backdrop that reports presses as clicks on `backdrop`.
fn backdrop_layer<'a>(backdrop: &str) -> Element<'a, Message> {
    opaque(
        mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::Overlay(OverlayEvent::BackdropClicked(
            BackdropId::new(backdrop),
        ))),
    )
}

fn view_offcanvas(app: &App) -> Vec<Element<'_, Message>> {
    let panel = column![
        row![
            Text::new(app.i18n.tr("filters-title")).size(typography::TITLE_MD),
            Space::new().width(Length::Fill),
            button(text("×").size(typography::BODY))
                .on_press(toggle_message(keys::BTN_FILTERS))
                .style(styles::button::menu_item),
        ]
        .align_y(Vertical::Center),
        Text::new(app.i18n.tr("filters-status")).size(typography::BODY),
        Text::new(app.i18n.tr("filters-location")).size(typography::BODY),
        Text::new(app.i18n.tr("filters-hint")).size(typography::CAPTION),
    ]
    .spacing(spacing::SM);

    let drawer = container(panel)
        .width(sizing::OFFCANVAS_WIDTH)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::overlay::offcanvas);

    vec![
        backdrop_layer(keys::FILTERS_BACKDROP),
        container(opaque(drawer))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .into(),
    ]
}

fn view_modals(app: &App) -> Vec<Element<'_, Message>> {
    let mut dialogs = Column::new().spacing(spacing::MD);
    if app.overlays.is_open(keys::ASSET_MODAL) {
        let form = asset_form::view(&app.asset_form, &app.i18n).map(Message::AssetForm);
        dialogs = dialogs.push(modal_panel(form));
    }
    if app.overlays.is_open(keys::WIZARD_MODAL) {
        let wizard = wizard::view(wizard::ViewContext {
            i18n: &app.i18n,
            wizard: &app.wizard,
        })
        .map(Message::Wizard);
        dialogs = dialogs.push(modal_panel(wizard));
    }

    vec![
        backdrop_layer(keys::MODAL_BACKDROP),
        center(dialogs)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    ]
}

fn modal_panel(content: Element<'_, Message>) -> Element<'_, Message> {
    opaque(
        container(content)
            .width(sizing::MODAL_WIDTH)
            .padding(spacing::LG)
            .style(styles::overlay::modal),
    )
}
