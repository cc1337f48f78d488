//! UI components and viewer application

use crate::config::ViewerConfig;
use crate::document::{Frame, Offset, PixelSize, centered_offset};
use crate::error::{InputError, OpenError};
use crate::input::{Command, KeyBindings};
use crate::pdf::PdfiumSource;
use crate::viewer::{APP_NAME, DisplaySurface, ViewerController, ViewerState};
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{button, column, container, image, row, scrollable, text, text_input};
use iced::{Alignment, Color, Element, Event, Length, Padding, Subscription, Task, event, window};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// Window work requested by the controller, carried out after each update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fullscreen(bool),
    Warn { title: &'static str, message: String },
    Fail(String),
    Close,
}

/// Display surface backed by an iced window
#[derive(Debug, Default)]
pub struct IcedSurface {
    size: PixelSize,
    page: Option<(image::Handle, PixelSize)>,
    offset: Offset,
    title: String,
    effects: Vec<Effect>,
}

impl IcedSurface {
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            title: APP_NAME.to_string(),
            ..Self::default()
        }
    }

    /// Track a new drawable area and re-center the page already on screen
    pub fn resize(&mut self, size: PixelSize) {
        self.size = size;
        if let Some((_, frame)) = &self.page {
            self.offset = centered_offset(size, *frame);
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn page(&self) -> Option<&(image::Handle, PixelSize)> {
        self.page.as_ref()
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl DisplaySurface for IcedSurface {
    fn size(&self) -> PixelSize {
        self.size
    }

    fn paint(&mut self, frame: Frame, offset: Offset) {
        let size = frame.size();
        let handle = image::Handle::from_rgba(frame.width, frame.height, frame.pixels);
        self.page = Some((handle, size));
        self.offset = offset;
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.effects.push(Effect::Fullscreen(fullscreen));
    }

    fn warn(&mut self, error: &InputError) {
        self.effects.push(Effect::Warn {
            title: error.title(),
            message: error.to_string(),
        });
    }

    fn fail(&mut self, error: &OpenError) {
        self.effects.push(Effect::Fail(error.to_string()));
    }

    fn close(&mut self) {
        self.effects.push(Effect::Close);
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Command(Command),
    PageEntryChanged(String),
    PageEntrySubmitted,
    KeyPressed(Key, Modifiers),
    WindowEvent(window::Id, window::Event),
}

/// Main viewer application
pub struct ViewerApp {
    controller: ViewerController<PdfiumSource, IcedSurface>,
    key_bindings: KeyBindings,
    page_entry: String,
    window_id: Option<window::Id>,
    pending_mode: Option<window::Mode>,
    config: ViewerConfig,
}

impl ViewerApp {
    /// Open `path` and show its first page
    pub fn new(source: PdfiumSource, path: PathBuf, config: ViewerConfig) -> (Self, Task<Message>) {
        let size = page_area_size(
            config.initial_window_width,
            config.initial_window_height,
            config.controls_height,
        );
        let state = ViewerState {
            zoom: config.initial_zoom,
            ..ViewerState::default()
        };

        let mut app = Self {
            controller: ViewerController::with_state(source, IcedSurface::new(size), state),
            key_bindings: KeyBindings::default(),
            page_entry: String::new(),
            window_id: None,
            pending_mode: None,
            config,
        };

        if app.controller.open_document(&path).is_ok() && app.config.start_fullscreen {
            app.controller.toggle_fullscreen();
        }

        let task = app.flush();
        (app, task)
    }

    pub fn title(&self) -> String {
        self.controller.surface().title().to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => self.controller.dispatch(command),
            Message::PageEntryChanged(value) => self.page_entry = value,
            Message::PageEntrySubmitted => {
                let raw = self.page_entry.clone();
                self.controller.dispatch(Command::GoToPage(raw));
            }
            Message::KeyPressed(key, modifiers) => {
                if let Some(command) = self.key_bindings.resolve(&key, modifiers) {
                    self.controller.dispatch(command);
                }
            }
            Message::WindowEvent(id, event) => {
                self.window_id = Some(id);
                if let window::Event::Opened { size, .. } | window::Event::Resized(size) = event {
                    let area = page_area_size(size.width, size.height, self.config.controls_height);
                    self.controller.surface_mut().resize(area);
                }
            }
        }

        self.flush()
    }

    /// Turn the surface's queued effects into dialogs and window tasks
    fn flush(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();

        for effect in self.controller.surface_mut().take_effects() {
            match effect {
                Effect::Fullscreen(fullscreen) => {
                    self.pending_mode = Some(if fullscreen {
                        window::Mode::Fullscreen
                    } else {
                        window::Mode::Windowed
                    });
                }
                Effect::Warn { title, message } => {
                    show_dialog(MessageLevel::Warning, title, &message);
                }
                Effect::Fail(message) => {
                    show_dialog(
                        MessageLevel::Error,
                        "Error",
                        &format!("Failed to open PDF:\n{}", message),
                    );
                }
                Effect::Close => tasks.push(iced::exit()),
            }
        }

        // Mode changes wait until the window has reported its id.
        if let Some(id) = self.window_id {
            if let Some(mode) = self.pending_mode.take() {
                tasks.push(window::set_mode(id, mode));
            }
        }

        Task::batch(tasks)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let surface = self.controller.surface();

        let page_area: Element<'_, Message> = if let Some((handle, frame)) = surface.page() {
            let offset = surface.offset();
            let page = image(handle.clone())
                .width(Length::Fixed(frame.width as f32))
                .height(Length::Fixed(frame.height as f32))
                .content_fit(iced::ContentFit::None);

            // Oversized pages start at the left/top edge and are panned by scrolling.
            let placed = container(page).padding(Padding {
                top: offset.y.max(0) as f32,
                left: offset.x.max(0) as f32,
                right: 0.0,
                bottom: 0.0,
            });

            container(
                scrollable(placed)
                    .direction(scrollable::Direction::Both {
                        vertical: scrollable::Scrollbar::default(),
                        horizontal: scrollable::Scrollbar::default(),
                    })
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::BLACK.into()),
                ..container::Style::default()
            })
            .into()
        } else {
            container(text("Loading...").size(20).color(Color::WHITE))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Color::BLACK.into()),
                    ..container::Style::default()
                })
                .into()
        };

        let controls = container(
            row![
                button("<< Prev").on_press(Message::Command(Command::PreviousPage)),
                button("Next >>").on_press(Message::Command(Command::NextPage)),
                text("Go to Page:").color(Color::WHITE),
                text_input("", &self.page_entry)
                    .on_input(Message::PageEntryChanged)
                    .on_submit(Message::PageEntrySubmitted)
                    .width(Length::Fixed(60.0)),
                button("Fullscreen").on_press(Message::Command(Command::ToggleFullscreen)),
            ]
            .spacing(5)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(self.config.controls_height))
        .padding(5)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb8(128, 128, 128).into()),
            ..container::Style::default()
        });

        column![page_area, controls].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = event::listen_with(route_key_event);

        let window_sub = window::events().map(|(id, event)| Message::WindowEvent(id, event));

        Subscription::batch(vec![keyboard_sub, window_sub])
    }
}

/// Key presses not consumed by a widget, plus Escape which always reaches
/// the viewer so it closes even while the page entry has focus
fn route_key_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if forwards_key(&key, status) =>
        {
            Some(Message::KeyPressed(key, modifiers))
        }
        _ => None,
    }
}

fn forwards_key(key: &Key, status: event::Status) -> bool {
    status == event::Status::Ignored || *key == Key::Named(Named::Escape)
}

/// Drawable area left for the page once the controls bar is placed
fn page_area_size(window_width: f32, window_height: f32, controls_height: f32) -> PixelSize {
    PixelSize::new(
        window_width.max(0.0) as u32,
        (window_height - controls_height).max(0.0) as u32,
    )
}

fn show_dialog(level: MessageLevel, title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
