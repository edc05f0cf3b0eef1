//! Rendering a session into the message the chat surface displays.
//!
//! Everything here is a pure function of the session: rendering the same
//! session twice yields the same [`ViewModel`].

use crate::games::othello::{Cell, Coord, Outcome, Side};
use crate::pending::{Axis, PendingMove};
use crate::rule_engine::RuleEngine;
use crate::session::{Participants, Session};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Title of every game message.
pub const TITLE: &str = "Othello";

/// Glyph for a white stone.
pub const WHITE_STONE: &str = "⚪";

/// Glyph for a black stone.
pub const BLACK_STONE: &str = "⚫";

/// Glyph for an empty cell.
pub const EMPTY_CELL: &str = "🟩";

/// Keycap glyphs for the coordinates 0-7.
pub const NUMBER_GLYPHS: [&str; 8] = ["0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣"];

/// Everything the chat surface needs to draw one game message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ViewModel {
    /// Message title.
    title: String,
    /// Outcome banner (when finished), players, turn info and the board.
    body: String,
    /// Move and stone counts with an avatar.
    footer: Footer,
    /// Game creation time; absent once the game is over.
    timestamp: Option<DateTime<Utc>>,
    /// Interactive controls; absent once the game is over.
    controls: Option<Controls>,
}

/// Footer line of a game message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Footer {
    /// Footer text.
    text: String,
    /// Avatar shown next to the text.
    icon_url: Option<String>,
}

/// Controls attached to a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Controls {
    /// Column picker.
    column: Selector,
    /// Row picker.
    row: Selector,
    /// Places a stone at the picked coordinates.
    commit: Trigger,
    /// Gives up the turn.
    pass: Trigger,
}

/// Single-choice picker over the coordinates 0-7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Selector {
    /// Component identifier.
    id: String,
    /// Hint shown while nothing is picked.
    placeholder: String,
    /// One option per coordinate.
    options: Vec<SelectOption>,
}

impl Selector {
    /// The pre-highlighted option, if any.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.selected)
    }
}

/// One entry of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SelectOption {
    /// Visible label.
    label: String,
    /// Coordinate the option stands for.
    value: Coord,
    /// Keycap glyph.
    emoji: String,
    /// Whether the option is pre-highlighted.
    selected: bool,
}

/// Push button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Trigger {
    /// Component identifier.
    id: String,
    /// Visible label.
    label: String,
    /// Button glyph.
    emoji: String,
}

/// Renders the current state of a session.
pub fn render<E: RuleEngine>(session: &Session<E>) -> ViewModel {
    let engine = session.engine();
    let outcome = engine.outcome();
    let description = render_description(engine, session.participants());
    let footer = render_footer(engine, session.participants());

    if outcome.is_terminal() {
        let banner = render_banner(outcome, session.participants());
        ViewModel {
            title: TITLE.to_string(),
            body: format!("{banner}\n{description}"),
            footer,
            timestamp: None,
            controls: None,
        }
    } else {
        ViewModel {
            title: TITLE.to_string(),
            body: description,
            footer,
            timestamp: Some(*session.created_at()),
            controls: Some(render_controls(session.pending())),
        }
    }
}

/// Glyph for a side's stones.
pub fn stone(side: Side) -> &'static str {
    match side {
        Side::White => WHITE_STONE,
        Side::Black => BLACK_STONE,
    }
}

/// Grid of cells preceded by a coordinate header and row labels.
pub fn render_board<E: RuleEngine>(engine: &E) -> String {
    let mut lines = Vec::with_capacity(Coord::ALL.len() + 1);
    lines.push(format!("{EMPTY_CELL}{}", NUMBER_GLYPHS.concat()));

    for row in Coord::ALL {
        let mut line = NUMBER_GLYPHS[row.index()].to_string();
        for column in Coord::ALL {
            line.push_str(match engine.cell(column, row) {
                Cell::Stone(side) => stone(side),
                Cell::Empty => EMPTY_CELL,
            });
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn render_description<E: RuleEngine>(engine: &E, participants: &Participants) -> String {
    let seat = |side: Side| format!("{} {}", stone(side), participants.for_side(side).mention());
    let previous = engine
        .move_log()
        .last()
        .map_or_else(|| "-".to_string(), ToString::to_string);

    format!(
        "{} first {} second\nNext: {}\nPrevious: {}\n\n{}",
        seat(Side::White),
        seat(Side::Black),
        seat(engine.next_side()),
        previous,
        render_board(engine)
    )
}

fn render_footer<E: RuleEngine>(engine: &E, participants: &Participants) -> Footer {
    let counts: Vec<String> = Side::iter()
        .map(|side| format!("{}:{}", side.initial(), engine.stone_count(side)))
        .collect();

    Footer {
        text: format!("{} / {}", move_count(engine.move_log().len()), counts.join(" / ")),
        icon_url: participants.first().avatar_url().clone(),
    }
}

fn move_count(n: usize) -> String {
    match n {
        1 => "1 move".to_string(),
        n => format!("{n} moves"),
    }
}

fn render_banner(outcome: Outcome, participants: &Participants) -> String {
    match outcome.winner() {
        Some(side) => format!("**{} wins!**", participants.for_side(side).mention()),
        None => "**Draw!**".to_string(),
    }
}

fn render_controls(pending: &PendingMove) -> Controls {
    Controls {
        column: selector(Axis::Column, "Choose a column", pending),
        row: selector(Axis::Row, "Choose a row", pending),
        commit: Trigger {
            id: "commit".to_string(),
            label: "Place".to_string(),
            emoji: "🆗".to_string(),
        },
        pass: Trigger {
            id: "pass".to_string(),
            label: "Pass".to_string(),
            emoji: "⏩".to_string(),
        },
    }
}

fn selector(axis: Axis, placeholder: &str, pending: &PendingMove) -> Selector {
    let current = pending.get(axis);
    Selector {
        id: axis.to_string(),
        placeholder: placeholder.to_string(),
        options: Coord::ALL
            .into_iter()
            .map(|value| SelectOption {
                label: value.to_string(),
                value,
                emoji: NUMBER_GLYPHS[value.index()].to_string(),
                selected: current == Some(value),
            })
            .collect(),
    }
}
