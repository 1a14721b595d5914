//! TUI widgets: ratatui components for the chat page
//!
//! Chat layout:
//! ┌── Header (1) ────────────────────────────────────┐
//! │        Messages (flex, centered column)          │
//! │        Input row (dynamic, centered column)      │
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod conversation;
pub mod header;
pub mod input;
pub mod markdown;
pub mod placeholder;
pub mod status_bar;

use crate::config::PageConfig;
use crate::page::view::{ColumnLayout, EmptyChatView, Icon, InputRowView};
use input::InputWidget;
use placeholder::PlaceholderWidget;
use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal glyph for an icon
pub fn icon_glyph(icon: &Icon) -> &'static str {
    match icon {
        Icon::Logo => "◆",
        Icon::Castle => "♜",
        Icon::Send => "➤",
        Icon::Named(_) => "•",
    }
}

/// Narrow `area` to the page column, centered when the layout asks for it
pub fn column_area(area: Rect, column: ColumnLayout, config: &PageConfig) -> Rect {
    match column {
        ColumnLayout::FullWidth => area,
        ColumnLayout::Centered { width } => {
            let width = config.units_to_cells(width).min(area.width);
            Rect {
                x: area.x + (area.width - width) / 2,
                width,
                ..area
            }
        }
    }
}

/// Regions of the chat view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    pub messages: Rect,
    pub input_row: Rect,
    pub status_bar: Rect,
}

impl ChatLayout {
    pub fn compute(
        area: Rect,
        input_row: &InputRowView,
        column: ColumnLayout,
        config: &PageConfig,
    ) -> Self {
        let header_h: u16 = 1;
        let status_h: u16 = 1;

        let max_for_input = area.height.saturating_sub(header_h + status_h);
        let input_h = InputWidget::desired_height(&input_row.input)
            .min(max_for_input)
            .max(1);

        let [header, messages, input, status_bar] = Layout::vertical([
            Constraint::Length(header_h),
            Constraint::Fill(1),
            Constraint::Length(input_h),
            Constraint::Length(status_h),
        ])
        .areas(area);

        Self {
            header,
            messages: column_area(messages, column, config),
            input_row: column_area(input, column, config),
            status_bar,
        }
    }
}

/// Regions of the empty-chat placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderLayout {
    pub cards: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl PlaceholderLayout {
    /// Cards and input stacked in a box centered on both axes
    pub fn compute(area: Rect, view: &EmptyChatView, config: &PageConfig) -> Self {
        let [body, status_bar] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let cards_h = PlaceholderWidget::height(view);
        let input_h = InputWidget::desired_height(&view.input);
        let box_h = (cards_h + 1 + input_h).min(body.height);
        let box_w = config.units_to_cells(config.column_width).min(body.width);

        let centered = Rect {
            x: body.x + (body.width - box_w) / 2,
            y: body.y + (body.height - box_h) / 2,
            width: box_w,
            height: box_h,
        };

        let [cards, _, input] = Layout::vertical([
            Constraint::Length(cards_h),
            Constraint::Length(1),
            Constraint::Length(input_h),
        ])
        .areas(centered);

        Self {
            cards,
            input,
            status_bar,
        }
    }
}
