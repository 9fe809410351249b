use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use super::Surface;
use crate::core::{
    msg::{ui::UiMsg, Msg},
    state::contact::{ContactForm, FormField},
};

const SUBMIT_LABEL: &str = "[ Send Message ]";

pub fn view(form: &ContactForm, surface: &mut Surface) {
    let [name, email, message, error, actions] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(surface.area);

    field(form, FormField::Name, surface, name);
    field(form, FormField::Email, surface, email);
    field(form, FormField::Message, surface, message);

    if let Some(e) = form.error() {
        surface.render_widget(Paragraph::new(Line::from(e.to_string()).red()), error);
    }

    let width = SUBMIT_LABEL.chars().count() as u16;
    surface.button(
        Rect::new(actions.x, actions.y, width.min(actions.width), 1),
        SUBMIT_LABEL,
        Msg::Ui(UiMsg::SubmitContact),
        false,
    );
    surface.render_widget(
        Paragraph::new(Line::from("tab next field · ctrl-s send").dark_gray()).right_aligned(),
        Rect::new(
            actions.x + width + 1,
            actions.y,
            actions.width.saturating_sub(width + 1),
            1,
        ),
    );
}

fn field(form: &ContactForm, field: FormField, surface: &mut Surface, area: Rect) {
    let focused = form.focus() == field;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut value = form.value(field).to_string();
    if focused {
        value.push('▏');
    }

    surface.render_widget(
        Paragraph::new(value).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border)
                .title(field.to_string()),
        ),
        area,
    );
    surface.region(area, Msg::Ui(UiMsg::FocusField(field)));
}
