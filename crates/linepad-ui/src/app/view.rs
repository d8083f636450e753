use iced::widget::{
    Column, Space, button, column, container, horizontal_space, mouse_area, row, scrollable, text,
    text_input,
};
use iced::{Background, Border, Color, Element, Length, Padding, Theme, alignment};

use linepad_buffer::Line;

use crate::app::{App, Message, active_line_input};
use crate::theme::colors;
use crate::widget::PressObserver;

fn line_background(line: &Line) -> Color {
    if line.is_selected() {
        colors::LINE_SELECTED
    } else if line.is_active() {
        colors::LINE_ACTIVE
    } else {
        Color::TRANSPARENT
    }
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_toolbar(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_toolbar(&self) -> Element<'_, Message> {
        let btn_style = |_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => colors::BG_LIGHT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        };

        let toolbar = row![
            button(text("Add line").size(12))
                .padding(Padding::from([5, 12]))
                .style(btn_style)
                .on_press(Message::AddLine),
            button(text("Delete line").size(12))
                .padding(Padding::from([5, 12]))
                .style(btn_style)
                .on_press(Message::DeleteLine),
            horizontal_space(),
        ]
        .spacing(8)
        .align_y(alignment::Vertical::Center);

        container(toolbar)
            .width(Length::Fill)
            .padding(Padding::from([6, 10]))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn view_editor(&self) -> Element<'_, Message> {
        let body = row![self.view_gutter(), self.view_lines()];

        scrollable(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Line numbers, one label per row.
    pub fn view_gutter(&self) -> Element<'_, Message> {
        let style = self.style;
        let active = self.editor.active_index();

        let labels = self
            .editor
            .number_row()
            .labels()
            .iter()
            .enumerate()
            .map(|(index, number)| {
                let color = if Some(index) == active {
                    colors::TEXT_PRIMARY
                } else {
                    colors::TEXT_MUTED
                };
                container(text(number.to_string()).size(style.font_size).color(color))
                    .width(Length::Fill)
                    .height(style.line_height)
                    .padding(Padding::from([0, style.line_padding_x]))
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Center)
                    .into()
            });

        container(Column::with_children(labels))
            .width(style.gutter_width)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn view_lines(&self) -> Element<'_, Message> {
        let rows = self
            .editor
            .lines()
            .iter()
            .map(|line| self.view_line(line));

        Column::with_children(rows).width(Length::Fill).into()
    }

    fn view_line<'a>(&'a self, line: &'a Line) -> Element<'a, Message> {
        let style = self.style;
        let id = line.id();
        let background = line_background(line);

        if line.is_active() {
            // Only the active line is editable.
            let input = text_input("", line.content())
                .id(active_line_input())
                .on_input(move |content| Message::LineEdited(id, content))
                .size(style.font_size)
                .padding(Padding::from([0, style.line_padding_x]))
                .line_height(text::LineHeight::Absolute(style.line_height.into()))
                .width(Length::Fill)
                .style(move |_: &Theme, _status| text_input::Style {
                    background: Background::Color(background),
                    border: Border {
                        color: colors::ACCENT,
                        width: 1.0,
                        radius: 0.0.into(),
                    },
                    icon: colors::TEXT_SECONDARY,
                    placeholder: colors::TEXT_MUTED,
                    value: colors::TEXT_PRIMARY,
                    selection: colors::LINE_SELECTED,
                });
            return PressObserver::new(input, Message::LineClicked(id)).into();
        }

        let cell = container(text(line.content()).size(style.font_size).color(colors::TEXT_PRIMARY))
            .width(Length::Fill)
            .height(style.line_height)
            .padding(Padding::from([0, style.line_padding_x]))
            .align_y(alignment::Vertical::Center)
            .style(move |_| container::Style {
                background: Some(Background::Color(background)),
                ..Default::default()
            });

        mouse_area(cell).on_press(Message::LineClicked(id)).into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let bar = row![
            text(&self.status_message).size(12).color(colors::TEXT_SECONDARY),
            horizontal_space(),
            text(self.position_status()).size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(12),
            text(format!("min {}", self.editor.model().min_lines))
                .size(12)
                .color(colors::TEXT_MUTED),
        ]
        .align_y(alignment::Vertical::Center);

        container(bar)
            .width(Length::Fill)
            .height(24)
            .padding(Padding::from([0, 10]))
            .align_y(alignment::Vertical::Center)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_LIGHT)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
