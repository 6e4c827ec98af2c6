//! Text rendering of the form, the selections, and the chain diagram.
//!
//! The diagram stacks one box per level, producer on top, joined by
//! "energy flow" arrows. Beside each box sits the level's population and a
//! grid of dots scaled by [`PopulationScale`]. Each level draws its dots
//! with its own glyph, listed in the legend.

use std::fmt::Write as _;

use foodchain_core::config::DisplayConfig;
use foodchain_core::{PopulationScale, SessionState};
use foodchain_types::{Chain, TrophicLevel};

/// Width of the text inside a level box.
const BOX_INNER: usize = 28;

/// Gap between a box and its dot column.
const GUTTER: &str = "   ";

/// Dot glyph for a level's grid and legend entry.
const fn glyph(level: TrophicLevel) -> char {
    match level {
        TrophicLevel::Producer => '*',
        TrophicLevel::PrimaryConsumer => 'o',
        TrophicLevel::SecondaryConsumer => '+',
        TrophicLevel::TertiaryConsumer => '#',
    }
}

/// Render the diagram for a chain.
pub fn diagram(chain: &Chain, display: &DisplayConfig) -> String {
    let scale = PopulationScale::for_chain(chain, display.max_dots);
    let border = format!("+{}+", "-".repeat(BOX_INNER.saturating_add(2)));
    let arrow_pad = " ".repeat(BOX_INNER.saturating_div(2).saturating_add(2));

    let mut out = String::new();
    for (level, entry) in chain.iter() {
        if level != TrophicLevel::Producer {
            let _ = writeln!(out, "{arrow_pad}|");
            let _ = writeln!(out, "{arrow_pad}v  energy flow");
        }

        let boxed = [
            border.clone(),
            boxed_line(level.title()),
            boxed_line(&entry.name),
            border.clone(),
        ];
        let mut side = vec![format!("pop: {}", entry.population)];
        side.extend(dot_rows(scale.dots_for(level), display.dots_per_row, glyph(level)));

        let height = boxed.len().max(side.len());
        let blank = " ".repeat(border.chars().count());
        for row in 0..height {
            let left = boxed.get(row).unwrap_or(&blank);
            let right = side.get(row).map_or("", String::as_str);
            let line = format!("{left}{GUTTER}{right}");
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Population Legend");
    for level in TrophicLevel::ALL {
        let _ = writeln!(out, "  {} {}", glyph(level), level.title());
    }
    let _ = writeln!(out, "  1 dot = {} individuals", scale.scale);
    out
}

/// Render the form text and the current selections.
pub fn session_summary(state: &SessionState) -> String {
    let form = state.form();
    let mut out = String::from("Form:\n");
    for level in TrophicLevel::ALL {
        let _ = writeln!(
            out,
            "  {:<19} name: {:<16} population: {}",
            level.title(),
            quoted(form.name(level)),
            quoted(form.population(level)),
        );
    }
    let _ = writeln!(
        out,
        "Model: {} ({})",
        state.model(),
        state.model().description()
    );
    let _ = writeln!(out, "Level to change: {}", state.change_level());
    out
}

/// Message shown in place of a diagram before anything is built.
pub const NO_CHAIN: &str =
    "No food chain yet. Fill in the form and `build`, or load an `example`.";

fn boxed_line(text: &str) -> String {
    let clipped: String = text.chars().take(BOX_INNER).collect();
    format!("| {clipped:<BOX_INNER$} |")
}

fn dot_rows(dots: u64, per_row: u64, dot: char) -> Vec<String> {
    let mut rows = Vec::new();
    let mut remaining = dots;
    while remaining > 0 {
        let take = remaining.min(per_row.max(1));
        let width = usize::try_from(take).unwrap_or(usize::MAX);
        rows.push(std::iter::repeat_n(dot, width).collect());
        remaining = remaining.saturating_sub(take);
    }
    rows
}

fn quoted(text: &str) -> String {
    format!("{text:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grassland() -> Chain {
        Chain::from_parts(["Grass", "Rabbit", "Snake", "Hawk"], [1000, 100, 10, 1])
    }

    #[test]
    fn diagram_lists_levels_top_down() {
        let text = diagram(&grassland(), &DisplayConfig::default());
        let producer = text.find("Producer");
        let tertiary = text.find("Tertiary Consumer");
        assert!(producer.is_some());
        assert!(producer < tertiary);
        assert_eq!(text.matches("energy flow").count(), 3);
        assert!(text.contains("| Grass"));
        assert!(text.contains("pop: 1000"));
    }

    #[test]
    fn legend_reports_scale() {
        let text = diagram(&grassland(), &DisplayConfig::default());
        assert!(text.contains("Population Legend"));
        assert!(text.contains("1 dot = 10 individuals"));
        let legend: Vec<&str> = text
            .lines()
            .skip_while(|line| *line != "Population Legend")
            .skip(1)
            .collect();
        assert_eq!(
            legend,
            [
                "  * Producer",
                "  o Primary Consumer",
                "  + Secondary Consumer",
                "  # Tertiary Consumer",
                "  1 dot = 10 individuals",
            ]
        );
    }

    #[test]
    fn each_level_draws_its_own_glyph() {
        let text = diagram(&grassland(), &DisplayConfig::default());
        // Scale 10: Rabbit 100 -> 10 dots, Snake 10 -> 1, Hawk 1 -> 1.
        assert!(text.lines().any(|line| line.ends_with("   oooooooooo")));
        assert!(text.lines().any(|line| line.ends_with("   +")));
        assert!(text.lines().any(|line| line.ends_with("   #")));
    }

    #[test]
    fn dot_grid_wraps_at_row_width() {
        assert_eq!(dot_rows(0, 10, '*'), Vec::<String>::new());
        let rows = dot_rows(23, 10, '*');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.last().map(String::len), Some(3));
    }

    #[test]
    fn producer_dots_follow_display_settings() {
        let display = DisplayConfig {
            max_dots: 80,
            dots_per_row: 20,
        };
        let text = diagram(&grassland(), &display);
        // 1000 at scale 10 is 100 dots, capped at 80: four rows of twenty.
        let full_rows = text.lines().filter(|line| line.ends_with(&"*".repeat(20))).count();
        assert_eq!(full_rows, 4);
    }

    #[test]
    fn long_names_are_clipped_to_the_box() {
        let chain = Chain::from_parts(
            ["An extraordinarily long producer name", "B", "C", "D"],
            [1, 1, 1, 1],
        );
        let text = diagram(&chain, &DisplayConfig::default());
        let right_edge = BOX_INNER.saturating_add(3);
        assert!(
            text.lines()
                .filter(|line| line.starts_with('|'))
                .all(|line| line.chars().nth(right_edge) == Some('|'))
        );
        assert!(text.contains("| An extraordinarily long prod |"));
    }

    #[test]
    fn summary_shows_selections() {
        let text = session_summary(&SessionState::default());
        assert!(text.contains("Model: Balanced"));
        assert!(text.contains("Level to change: primary consumer"));
        assert!(text.contains("name: \"\""));
    }
}
