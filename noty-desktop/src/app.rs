use crate::menu::{menu_bar, MenuMessage};
use crate::settings::{save_settings_to, AppSettings, ThemeChoice};
use crate::StoreTarget;
use iced::alignment::Vertical;
use iced::widget::{button, column, container, mouse_area, row, scrollable, text, text_input, Column};
use iced::{event, keyboard, window, Element, Event, Length, Subscription, Task, Theme};
use noty_core::{Key, PageEditor, Workspace, TITLE_PLACEHOLDER};
use std::path::PathBuf;

pub struct NotyApp {
    workspace: Option<Workspace>,
    editor: Option<PageEditor>,
    /// Block edited since the last key press, with its text before the edit.
    pending_edit: Option<(String, String)>,
    title_focused: bool,
    settings: AppSettings,
    settings_path: PathBuf,
    status_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub enum Message {
    Menu(MenuMessage),
    OpenPage(String),
    DeletePage(String),
    FocusTitle,
    TitleEdited(String),
    BlockEdited(String, String),
    FocusBlock(String),
    MoveBlock(String, Direction),
    KeyPressed(Key, bool),
}

impl NotyApp {
    pub fn new(
        settings: AppSettings,
        settings_path: PathBuf,
        target: StoreTarget,
    ) -> (Self, Task<Message>) {
        let opened = match &target {
            StoreTarget::File(path) => Workspace::open(path),
            StoreTarget::Memory => Workspace::in_memory(),
        };
        let (workspace, status_message) = match opened {
            Ok(ws) => (Some(ws), "Welcome to Noty".to_string()),
            Err(e) => {
                log::error!("could not open store {target:?}: {e}");
                (None, e.user_message())
            }
        };

        (
            Self {
                workspace,
                editor: None,
                pending_edit: None,
                title_focused: false,
                settings,
                settings_path,
                status_message,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        match &self.editor {
            Some(editor) if !editor.title().trim().is_empty() => format!("Noty - {}", editor.title()),
            _ => "Noty".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(MenuMessage::NewPage) => {
                let Some(ws) = self.workspace.as_mut() else {
                    return Task::none();
                };
                match ws.create_page("") {
                    Ok(page) => return self.open_page(&page.id),
                    Err(e) => self.status_message = e.user_message(),
                }
            }
            Message::Menu(MenuMessage::ShowPages) => {
                self.save();
                self.editor = None;
                self.pending_edit = None;
            }
            Message::Menu(MenuMessage::ToggleTheme) => {
                self.settings.theme = self.settings.theme.toggled();
                if let Err(e) = save_settings_to(&self.settings_path, &self.settings) {
                    log::error!("{e}");
                    self.status_message = e;
                }
            }
            Message::Menu(MenuMessage::About) => {
                self.status_message = format!("Noty {}", env!("CARGO_PKG_VERSION"));
            }
            Message::OpenPage(page_id) => return self.open_page(&page_id),
            Message::DeletePage(page_id) => {
                if let Some(ws) = self.workspace.as_mut() {
                    if let Err(e) = ws.delete_page(&page_id) {
                        self.status_message = e.user_message();
                    }
                }
            }
            Message::FocusTitle => self.title_focused = true,
            Message::TitleEdited(title) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.set_title(title);
                    self.title_focused = true;
                    self.save();
                }
            }
            Message::BlockEdited(block_id, content) => {
                let Some(editor) = self.editor.as_mut() else {
                    return Task::none();
                };
                let Some(before) = editor
                    .blocks()
                    .iter()
                    .find(|b| b.id == block_id)
                    .map(|b| b.content.clone())
                else {
                    return Task::none();
                };
                if let Err(e) = editor
                    .update_block(&block_id, content)
                    .and_then(|()| editor.focus_block(&block_id))
                {
                    self.status_message = e.user_message();
                    return Task::none();
                }
                self.title_focused = false;
                if self.pending_edit.is_none() {
                    self.pending_edit = Some((block_id, before));
                }
                self.save();
            }
            Message::FocusBlock(block_id) => {
                if let Some(editor) = self.editor.as_mut() {
                    if editor.focus_block(&block_id).is_ok() {
                        self.title_focused = false;
                        return self.focus_task();
                    }
                }
            }
            Message::MoveBlock(block_id, direction) => return self.move_block(&block_id, direction),
            Message::KeyPressed(key, alt) => return self.key_pressed(key, alt),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let menu = menu_bar().map(Message::Menu);

        let body: Element<'_, Message> = match (&self.workspace, &self.editor) {
            (None, _) => container(text("No notes store is open"))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
            (Some(_), Some(editor)) => self.view_editor(editor),
            (Some(ws), None) => self.view_pages(ws),
        };

        column![
            menu,
            container(body).width(Length::Fill).height(Length::Fill),
            text(&self.status_message).size(12),
        ]
        .spacing(8)
        .padding(12)
        .into()
    }

    pub fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.editor.is_some() {
            event::listen_with(key_message)
        } else {
            Subscription::none()
        }
    }

    fn view_pages<'a>(&'a self, ws: &'a Workspace) -> Element<'a, Message> {
        if ws.list_pages().is_empty() {
            return container(text("No pages yet. Use \"New page\" to start one."))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let mut list = Column::new().spacing(6);
        for page in ws.list_pages() {
            list = list.push(
                row![
                    button(text(page.display_title()))
                        .on_press(Message::OpenPage(page.id.clone()))
                        .width(Length::Fill),
                    text(format!("{} blocks", page.blocks.len())).size(12),
                    button(text("Delete")).on_press(Message::DeletePage(page.id.clone())),
                ]
                .spacing(8)
                .align_y(Vertical::Center),
            );
        }
        scrollable(list).into()
    }

    fn view_editor<'a>(&'a self, editor: &'a PageEditor) -> Element<'a, Message> {
        let title = text_input(TITLE_PLACEHOLDER, editor.title())
            .on_input(Message::TitleEdited)
            .size(28)
            .padding(8);

        let last = editor.blocks().len().saturating_sub(1);
        let mut blocks = Column::new().spacing(4);
        for (index, block) in editor.blocks().iter().enumerate() {
            let block_id = block.id.clone();
            let input = text_input(
                editor.block_placeholder(&block.id).unwrap_or(""),
                &block.content,
            )
            .id(block_input_id(&block.id))
            .on_input(move |value| Message::BlockEdited(block_id.clone(), value))
            .padding(6);

            let handle = column![
                button(text("▲").size(10)).on_press_maybe(
                    (index > 0).then(|| Message::MoveBlock(block.id.clone(), Direction::Up))
                ),
                button(text("▼").size(10)).on_press_maybe(
                    (index < last).then(|| Message::MoveBlock(block.id.clone(), Direction::Down))
                ),
            ]
            .spacing(2);

            blocks = blocks.push(
                row![
                    handle,
                    mouse_area(input).on_release(Message::FocusBlock(block.id.clone())),
                ]
                .spacing(6)
                .align_y(Vertical::Center),
            );
        }

        column![
            button(text("< Pages")).on_press(Message::Menu(MenuMessage::ShowPages)),
            mouse_area(title).on_release(Message::FocusTitle),
            scrollable(blocks),
        ]
        .spacing(12)
        .max_width(720.0)
        .into()
    }

    fn open_page(&mut self, page_id: &str) -> Task<Message> {
        self.save();
        let Some(ws) = self.workspace.as_mut() else {
            return Task::none();
        };
        match ws.open_editor(page_id) {
            Ok(editor) => {
                self.editor = Some(editor);
                self.pending_edit = None;
                self.title_focused = false;
                self.focus_task()
            }
            Err(e) => {
                self.status_message = e.user_message();
                Task::none()
            }
        }
    }

    fn move_block(&mut self, block_id: &str, direction: Direction) -> Task<Message> {
        let Some(editor) = self.editor.as_mut() else {
            return Task::none();
        };
        let Some(index) = editor.blocks().iter().position(|b| b.id == block_id) else {
            return Task::none();
        };
        let to = match direction {
            Direction::Up => match index.checked_sub(1) {
                Some(to) => to,
                None => return Task::none(),
            },
            Direction::Down => index + 1,
        };
        match editor.move_block(block_id, to) {
            Ok(true) => {
                self.save();
                self.focus_task()
            }
            Ok(false) => Task::none(),
            Err(e) => {
                self.status_message = e.user_message();
                Task::none()
            }
        }
    }

    fn key_pressed(&mut self, key: Key, alt: bool) -> Task<Message> {
        let pending = self.pending_edit.take();
        if self.title_focused {
            return Task::none();
        }
        let Some(editor) = self.editor.as_mut() else {
            return Task::none();
        };
        let Some(index) = editor.focused_index() else {
            return Task::none();
        };
        let focused_id = editor.blocks()[index].id.clone();

        if alt {
            return match key {
                Key::ArrowUp => self.move_block(&focused_id, Direction::Up),
                Key::ArrowDown => self.move_block(&focused_id, Direction::Down),
                _ => Task::none(),
            };
        }

        let text_before = match pending {
            Some((id, before)) if id == focused_id => before,
            _ => editor.blocks()[index].content.clone(),
        };
        match editor.handle_key(key, index, &text_before) {
            Ok(Some(_)) => {
                self.save();
                self.focus_task()
            }
            Ok(None) => Task::none(),
            Err(e) => {
                self.status_message = e.user_message();
                Task::none()
            }
        }
    }

    fn focus_task(&self) -> Task<Message> {
        match self.editor.as_ref().and_then(|e| e.focused()) {
            Some(id) => text_input::focus(block_input_id(id)),
            None => Task::none(),
        }
    }

    fn save(&mut self) {
        let (Some(ws), Some(editor)) = (self.workspace.as_mut(), self.editor.as_mut()) else {
            return;
        };
        if !editor.is_dirty() {
            return;
        }
        if let Err(e) = ws.save_editor(editor) {
            log::error!("failed to save page {}: {e}", editor.page_id());
            self.status_message = e.user_message();
        }
    }
}

fn block_input_id(block_id: &str) -> text_input::Id {
    text_input::Id::new(format!("block-{block_id}"))
}

fn key_message(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed(map_key(&key), modifiers.alt()))
        }
        _ => None,
    }
}

/// Maps an `iced` key to the editor's key set.
pub fn map_key(key: &keyboard::Key) -> Key {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Backspace) => Key::Backspace,
        keyboard::Key::Named(Named::Delete) => Key::Delete,
        keyboard::Key::Named(Named::ArrowUp) => Key::ArrowUp,
        keyboard::Key::Named(Named::ArrowDown) => Key::ArrowDown,
        _ => Key::Other,
    }
}

pub fn run(settings: AppSettings, settings_path: PathBuf, target: StoreTarget) -> iced::Result {
    iced::application(NotyApp::title, NotyApp::update, NotyApp::view)
        .theme(NotyApp::theme)
        .subscription(NotyApp::subscription)
        .run_with(move || NotyApp::new(settings, settings_path, target))
}
