use ratatui::{prelude::*, widgets::Paragraph};

use super::Surface;
use crate::{
    content::CERTIFICATES, core::state::dashboard::CertificatesPanel, domain::text::ellipsize,
};

pub fn view(panel: &CertificatesPanel, surface: &mut Surface) {
    let [list, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(surface.area);
    let width = list.width as usize;

    let lines: Vec<Line> = CERTIFICATES
        .iter()
        .skip(panel.scroll())
        .flat_map(|certificate| {
            [
                Line::from(ellipsize(certificate.title, width)).bold(),
                Line::from(ellipsize(
                    &format!("{} · {}", certificate.organization, certificate.date),
                    width,
                ))
                .dark_gray(),
                Line::from(""),
            ]
        })
        .collect();
    surface.render_widget(Paragraph::new(lines), list);
    surface.render_widget(
        Paragraph::new(
            Line::from(format!(
                "{}/{} · j/k scroll",
                panel.scroll() + 1,
                CERTIFICATES.len()
            ))
            .dark_gray(),
        ),
        footer,
    );
}
