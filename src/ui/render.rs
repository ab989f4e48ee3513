use crate::api::CharacterDetail;
use crate::characters::ListStatus;
use crate::ui::app::App;
use crate::ui::character_view::CharacterViewState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route()).widget(), header);
    frame.render_widget(Clear, body);

    let (list_area, detail_area) = split_body(body);
    draw_list(frame, app, list_area);
    draw_detail(frame, app.character_view(), detail_area);

    let footer_widget = Footer::new(app.character_view().is_open());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn pane(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.characters();
    let block = pane("Characters");

    // Loading wins over whatever the list held before.
    match state.status() {
        ListStatus::Loading => {
            let text = Paragraph::new(Line::styled(
                "Loading...",
                Style::default().fg(MUTED_TEXT),
            ))
            .block(block);
            frame.render_widget(text, area);
        }
        ListStatus::Failed => {
            let message = state
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            let text = Paragraph::new(vec![
                Line::styled("Error", Style::default().fg(STATUS_ERROR)),
                Line::styled(message, Style::default().fg(STATUS_ERROR)),
                Line::from(""),
                Line::styled("Press F to try again.", Style::default().fg(MUTED_TEXT)),
            ])
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(text, area);
        }
        ListStatus::Empty => {
            let text = Paragraph::new(Line::styled(
                "No characters loaded. Press F to fetch.",
                Style::default().fg(MUTED_TEXT),
            ))
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(text, area);
        }
        ListStatus::Loaded => {
            let items: Vec<ListItem> = state
                .characters
                .iter()
                .map(|character| {
                    ListItem::new(Line::styled(
                        character.name.clone(),
                        Style::default().fg(HEADER_TEXT),
                    ))
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut list_state = ListState::default().with_selected(Some(app.selection()));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn draw_detail(frame: &mut Frame<'_>, view: &CharacterViewState, area: Rect) {
    let (title, lines) = match view {
        CharacterViewState::Closed => (
            "Character".to_string(),
            vec![Line::styled(
                "Select a character and press Enter.",
                Style::default().fg(MUTED_TEXT),
            )],
        ),
        CharacterViewState::Loading { id } => (
            format!("Character {id}"),
            vec![Line::styled("Loading...", Style::default().fg(MUTED_TEXT))],
        ),
        CharacterViewState::Failed { id, error } => (
            format!("Character {id}"),
            vec![
                Line::styled("Error", Style::default().fg(STATUS_ERROR)),
                Line::styled(error.to_string(), Style::default().fg(STATUS_ERROR)),
            ],
        ),
        CharacterViewState::Loaded { id, character } => {
            (format!("Character {id}"), detail_lines(character))
        }
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(pane(&title));
    frame.render_widget(widget, area);
}

fn detail_lines(character: &CharacterDetail) -> Vec<Line<'static>> {
    let name = character
        .name
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "Unknown".to_string());

    let mut lines = vec![
        Line::styled(
            name,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (label, value) in character.attributes() {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                value.map(ToString::to_string).unwrap_or_default(),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
    }
    lines
}
