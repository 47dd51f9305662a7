use crate::ui::app::{App, StatusKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{BEAM_TEAL, CARD_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN};
use crate::welcome::{Destination, WalletStatus, WelcomeRepository};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<R: WelcomeRepository>(frame: &mut Frame<'_>, app: &App<R>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.screen(), app.is_view_attached()),
        header,
    );
    frame.render_widget(Clear, body);

    let card = centered_rect(70, 70, body);
    let (title, mut lines) = match app.screen().current {
        Some(destination) => (destination.title(), screen_lines(destination)),
        None => ("Loading", vec![Line::from("Waiting for the presenter...")]),
    };

    lines.push(Line::from(""));
    lines.push(wallet_line(app.wallet_status()));
    if let Some(status) = app.status() {
        let color = match status.kind {
            StatusKind::Info => STATUS_WARN,
            StatusKind::Error => STATUS_ERROR,
        };
        lines.push(Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(color),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER)),
        );
    frame.render_widget(widget, card);

    frame.render_widget(Footer::new().widget(app.keys(), footer), footer);
}

fn screen_lines(destination: Destination) -> Vec<Line<'static>> {
    let heading = Style::default().fg(BEAM_TEAL).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);
    let (headline, body): (&str, Vec<&str>) = match destination {
        Destination::WelcomeMain => (
            "Welcome to Beam",
            vec!["Create a new wallet or open the one on this device."],
        ),
        Destination::Description => (
            "Create new wallet",
            vec![
                "A recovery phrase will be generated for your wallet.",
                "Write it down and keep it somewhere safe.",
            ],
        ),
        Destination::Passwords => (
            "Set a password",
            vec!["The password protects this wallet on this device."],
        ),
        Destination::MainActivity => ("Wallet", vec!["Your wallet is open."]),
    };

    let mut lines = vec![Line::from(Span::styled(headline, heading)), Line::from("")];
    lines.extend(body.into_iter().map(|line| Line::from(Span::styled(line, text))));
    lines
}

fn wallet_line(status: Option<&Result<WalletStatus, String>>) -> Line<'static> {
    match status {
        Some(Ok(status @ WalletStatus::Present)) => {
            Line::from(Span::styled(status.label(), Style::default().fg(STATUS_OK)))
        }
        Some(Ok(status @ WalletStatus::Missing)) => {
            Line::from(Span::styled(status.label(), Style::default().fg(HEADER_TEXT)))
        }
        Some(Err(err)) => Line::from(Span::styled(
            format!("Wallet lookup failed: {}", err),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    }
}
