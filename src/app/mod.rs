// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the body map and the
//! zone picker.
//!
//! The `App` struct wires the two diagram components to localization,
//! configuration and the record sink, and turns their effects into records,
//! notifications and persisted preferences.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::diagram::DiagramSource;
use crate::domain::body::{DiagramVariant, ZoneCatalog, ZoneId, ZoneSelection};
use crate::i18n::fluent::I18n;
use crate::record::{JsonLinesSink, RecordSink, SessionHistory};
use crate::ui::body_map;
use crate::ui::notifications::{self, Notification};
use crate::ui::zone_picker;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    body_map: body_map::State,
    zone_picker: zone_picker::State,
    /// Body map pick waiting for confirmation.
    pending: Option<ZoneSelection>,
    /// Zone whose details the picker asked for.
    details: Option<ZoneId>,
    history: SessionHistory,
    sink: Box<dyn RecordSink>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("pending", &self.pending)
            .field("history_len", &self.history.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks where diagrams come from: an asset directory (CLI, then config),
/// otherwise a base URL (CLI, then config), otherwise the embedded copies.
pub fn resolve_source(flags: &Flags, config: &Config) -> DiagramSource {
    let assets_dir = flags
        .assets_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.diagram.assets_dir.clone());
    if let Some(dir) = assets_dir {
        return DiagramSource::Directory(dir);
    }

    let base_url = flags
        .base_url
        .clone()
        .or_else(|| config.diagram.base_url.clone());
    match base_url {
        Some(url) => DiagramSource::http(url),
        None => DiagramSource::Embedded,
    }
}

/// Loads the configured catalog file, falling back to the built-in catalog
/// with a warning key when it cannot be read.
pub fn load_catalog(config: &Config) -> (ZoneCatalog, Option<&'static str>) {
    let Some(path) = &config.catalog.file else {
        return (ZoneCatalog::builtin(), None);
    };
    match ZoneCatalog::load_from_path(path) {
        Ok(catalog) => {
            log::debug!("loaded {} catalog entries from {}", catalog.len(), path.display());
            (catalog, None)
        }
        Err(err) => {
            log::warn!("ignoring catalog {}: {}", path.display(), err);
            (ZoneCatalog::builtin(), Some("notification-catalog-load-error"))
        }
    }
}

impl App {
    /// Loads configuration from disk, then builds the app.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (mut app, task) = Self::with_config(
            &flags,
            config,
            Box::new(JsonLinesSink::stdout()),
        );
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        (app, task)
    }

    /// Builds the app from an already loaded configuration and starts the
    /// initial diagram loads of both screens.
    pub fn with_config(
        flags: &Flags,
        config: Config,
        sink: Box<dyn RecordSink>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new();

        let (catalog, catalog_warning) = load_catalog(&config);
        if let Some(key) = catalog_warning {
            notifications.push(Notification::warning(key));
        }
        let catalog = Arc::new(catalog);
        let source = Arc::new(resolve_source(flags, &config));
        log::debug!("diagram source: {:?}", source);

        let gender = flags.gender.unwrap_or_else(|| config.initial_gender());
        let side = flags.side.unwrap_or_else(|| config.initial_side());

        let (body_map, body_map_task) = body_map::State::new(
            Arc::clone(&source),
            Arc::clone(&catalog),
            gender,
            side,
            config.pulse_duration(),
        );
        let (zone_picker, picker_task) = zone_picker::State::new(
            source,
            catalog,
            DiagramVariant::full(gender, side),
            Vec::new(),
            config.pulse_duration(),
            config.double_click_window(),
        );

        let app = Self {
            i18n,
            screen: Screen::default(),
            config,
            body_map,
            zone_picker,
            pending: None,
            details: None,
            history: SessionHistory::default(),
            sink,
            notifications,
        };
        let task = Task::batch([
            body_map_task.map(Message::BodyMap),
            picker_task.map(Message::ZonePicker),
        ]);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.body_map.is_animating() || self.zone_picker.is_animating(),
            self.notifications.has_notifications(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            config: &mut self.config,
            body_map: &mut self.body_map,
            zone_picker: &mut self.zone_picker,
            pending: &mut self.pending,
            details: &mut self.details,
            history: &mut self.history,
            sink: self.sink.as_mut(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::BodyMap(msg) => update::handle_body_map_message(&mut ctx, msg),
            Message::ZonePicker(msg) => update::handle_zone_picker_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::ConfirmRecord => update::handle_confirm_record(&mut ctx),
            Message::CancelRecord => {
                *ctx.pending = None;
                Task::none()
            }
            Message::CloseDetails => {
                *ctx.details = None;
                Task::none()
            }
            Message::ClearSelection => update::handle_clear_selection(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            body_map: &self.body_map,
            zone_picker: &self.zone_picker,
            pending: self.pending.as_ref(),
            details: self.details.as_ref(),
            history: &self.history,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::body::{Gender, Side, View};
    use crate::error::{Error, Result};
    use crate::record::PainRecordDraft;
    use crate::ui::diagram_pane;
    use crate::ui::diagram_pane::tests::{scene, zone};
    use crate::ui::navbar;
    use crate::ui::zone_overlay::OverlayEvent;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Instant;

    #[derive(Clone, Default)]
    struct MemorySink {
        records: Rc<RefCell<Vec<PainRecordDraft>>>,
        fail: bool,
    }

    impl RecordSink for MemorySink {
        fn submit(&mut self, draft: &PainRecordDraft) -> Result<()> {
            if self.fail {
                return Err(Error::Io("sink closed".into()));
            }
            self.records.borrow_mut().push(draft.clone());
            Ok(())
        }
    }

    fn app_with(sink: MemorySink) -> App {
        let flags = Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        };
        App::with_config(&flags, Config::default(), Box::new(sink)).0
    }

    /// Mounts the body map scene and clicks `raw` on it.
    fn pick(app: &mut App, raw: &str) {
        let variant = app.body_map.view_state().variant();
        let generation = app.body_map.pane().requests();
        let _ = app.update(Message::BodyMap(body_map::Message::Pane(
            diagram_pane::Message::Loaded {
                generation,
                result: Ok(scene(variant)),
            },
        )));
        let _ = app.update(Message::BodyMap(body_map::Message::Pane(
            diagram_pane::Message::Overlay(OverlayEvent::Clicked {
                generation,
                zone: zone(raw),
                at: Instant::now(),
            }),
        )));
    }

    #[test]
    fn source_prefers_directory_then_url() {
        let mut config = Config::default();
        config.diagram.base_url = Some("https://example.org/assets".into());
        assert!(matches!(
            resolve_source(&Flags::default(), &config),
            DiagramSource::Http { .. }
        ));

        let flags = Flags {
            assets_dir: Some("/srv/diagrams".into()),
            ..Flags::default()
        };
        assert!(matches!(
            resolve_source(&flags, &config),
            DiagramSource::Directory(ref dir) if dir == &PathBuf::from("/srv/diagrams")
        ));

        assert!(matches!(
            resolve_source(&Flags::default(), &Config::default()),
            DiagramSource::Embedded
        ));
    }

    #[test]
    fn unreadable_catalog_falls_back_with_warning() {
        let mut config = Config::default();
        config.catalog.file = Some(PathBuf::from("/definitely/not/here/catalog.toml"));
        let (catalog, warning) = load_catalog(&config);
        assert_eq!(warning, Some("notification-catalog-load-error"));
        assert_eq!(catalog.len(), ZoneCatalog::builtin().len());
    }

    #[test]
    fn cli_variant_overrides_config() {
        let mut config = Config::default();
        config.diagram.initial_gender = Some(Gender::Male);
        let flags = Flags {
            gender: Some(Gender::Female),
            side: Some(Side::Back),
            ..Flags::default()
        };
        let (app, _) = App::with_config(&flags, config, Box::new(MemorySink::default()));
        let variant = app.body_map.view_state().variant();
        assert_eq!(variant, DiagramVariant::full(Gender::Female, Side::Back));
        assert_eq!(app.zone_picker.variant(), variant);
    }

    #[test]
    fn confirming_a_pick_writes_one_record() {
        let sink = MemorySink::default();
        let records = Rc::clone(&sink.records);
        let mut app = app_with(sink);

        pick(&mut app, "1_1_24");
        assert_eq!(
            app.pending.as_ref().map(|s| s.zone_name.as_str()),
            Some("1.1.24")
        );

        let _ = app.update(Message::ConfirmRecord);
        assert!(app.pending.is_none());
        assert_eq!(app.history.len(), 1);
        let records = records.borrow();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].zone_code.as_str(), "1_1_24");
        assert_eq!(records[0].gender_code, Gender::Male);
        assert_eq!(records[0].side, Side::Front);
    }

    #[test]
    fn cancel_discards_the_pick() {
        let sink = MemorySink::default();
        let records = Rc::clone(&sink.records);
        let mut app = app_with(sink);

        pick(&mut app, "1_1_24");
        let _ = app.update(Message::CancelRecord);
        assert!(app.pending.is_none());
        assert!(records.borrow().is_empty());
        assert!(app.history.is_empty());
    }

    #[test]
    fn failed_write_keeps_the_pick_and_notifies() {
        let mut app = app_with(MemorySink {
            fail: true,
            ..MemorySink::default()
        });
        pick(&mut app, "1_1_24");
        let _ = app.update(Message::ConfirmRecord);

        assert!(app.pending.is_some());
        assert!(app.history.is_empty());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-record-error"));
    }

    #[test]
    fn head_click_drills_down_without_a_pending_pick() {
        let mut app = app_with(MemorySink::default());
        pick(&mut app, "head");
        assert!(app.pending.is_none());
        assert_eq!(app.body_map.view_state().view(), View::Head);
    }

    #[test]
    fn side_change_is_remembered_in_config() {
        let mut app = app_with(MemorySink::default());
        let _ = app.update(Message::BodyMap(body_map::Message::SideSelected(Side::Back)));
        assert_eq!(app.config.diagram.initial_side, Some(Side::Back));
        assert_eq!(app.config.diagram.initial_gender, Some(Gender::Male));
    }

    #[test]
    fn picker_double_click_opens_details_and_clear_closes_them() {
        let mut app = app_with(MemorySink::default());
        let variant = app.zone_picker.variant();
        let _ = app.update(Message::ZonePicker(zone_picker::Message::Pane(
            diagram_pane::Message::Loaded {
                generation: 1,
                result: Ok(scene(variant)),
            },
        )));
        let at = Instant::now();
        for _ in 0..2 {
            let _ = app.update(Message::ZonePicker(zone_picker::Message::Pane(
                diagram_pane::Message::Overlay(OverlayEvent::Clicked {
                    generation: 1,
                    zone: zone("1_01"),
                    at,
                }),
            )));
        }
        assert_eq!(app.details.as_ref().map(ZoneId::as_str), Some("1_01"));

        let _ = app.update(Message::ZonePicker(zone_picker::Message::Pane(
            diagram_pane::Message::Overlay(OverlayEvent::Clicked {
                generation: 1,
                zone: zone("1_01"),
                at,
            }),
        )));
        assert!(!app.zone_picker.selection().is_empty());
        let _ = app.update(Message::ClearSelection);
        assert!(app.zone_picker.selection().is_empty());
        assert!(app.details.is_none());
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = app_with(MemorySink::default());
        let _ = app.update(Message::Navbar(navbar::Message::Open(Screen::ZonePicker)));
        assert_eq!(app.screen, Screen::ZonePicker);
    }

    #[test]
    fn title_is_localized() {
        let app = app_with(MemorySink::default());
        assert_eq!(app.title(), "Pain Map");
    }
}
