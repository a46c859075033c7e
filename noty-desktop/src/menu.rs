use iced::widget::{button, row, text};
use iced::Element;

#[derive(Debug, Clone)]
pub enum MenuMessage {
    NewPage,
    ShowPages,
    ToggleTheme,
    About,
}

pub fn menu_bar<'a>() -> Element<'a, MenuMessage> {
    row![
        button(text("New page")).on_press(MenuMessage::NewPage),
        button(text("Pages")).on_press(MenuMessage::ShowPages),
        button(text("Theme")).on_press(MenuMessage::ToggleTheme),
        button(text("About")).on_press(MenuMessage::About),
    ]
    .spacing(10)
    .into()
}
