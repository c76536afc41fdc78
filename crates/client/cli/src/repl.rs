//! Line-oriented command loop.
use std::io::{BufRead, Write};

use anyhow::Result;
use maze_core::{Action, ActionOutcome, Inspection, ItemKind, MazeCarver};
use maze_runtime::{Command, CommandReport, RoundInfo, Session};

use crate::render::{LEGEND, render};

const HELP: &str = "commands: move <dir> | <dir> | take | drop | use <dir> | look | dump | new | quit";

/// Reads commands until `quit` or end of input.
pub fn run<C, R, W>(session: &mut Session<C>, input: R, output: &mut W) -> Result<()>
where
    C: MazeCarver,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", describe_round(&session.round_info()))?;
    writeln!(output, "{HELP}")?;
    show_map(session, output)?;
    announce_escape(session, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(output, "{error}")?;
                writeln!(output, "{HELP}")?;
                continue;
            }
        };

        let report = match session.submit(command) {
            Ok(report) => report,
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            }
        };

        match report {
            CommandReport::Acted(outcome) => {
                writeln!(output, "{}", describe_outcome(&outcome))?;
                show_map(session, output)?;
                if outcome.reached_exit {
                    writeln!(output, "{}", describe_escape(outcome.moves))?;
                }
            }
            CommandReport::Refused(error) => writeln!(output, "{error}")?,
            CommandReport::Inspected(view) => writeln!(output, "{}", describe_view(&view))?,
            CommandReport::Snapshot(snapshot) => {
                writeln!(output, "{}", serde_json::to_string_pretty(&snapshot)?)?
            }
            CommandReport::NewRound(info) => {
                writeln!(output, "{}", describe_round(&info))?;
                show_map(session, output)?;
                announce_escape(session, output)?;
            }
            CommandReport::Quit => {
                writeln!(output, "Goodbye.")?;
                break;
            }
        }
    }
    Ok(())
}

fn show_map<C: MazeCarver, W: Write>(session: &Session<C>, output: &mut W) -> Result<()> {
    write!(output, "{}", render(&session.state().snapshot()))?;
    writeln!(output, "{LEGEND}")?;
    Ok(())
}

/// A round that starts on its exit is over before the first command.
fn announce_escape<C: MazeCarver, W: Write>(session: &Session<C>, output: &mut W) -> Result<()> {
    if session.is_escaped() {
        writeln!(output, "{}", describe_escape(session.state().player.moves))?;
    }
    Ok(())
}

fn describe_escape(moves: u32) -> String {
    let moves = match moves {
        1 => "1 move".to_string(),
        n => format!("{n} moves"),
    };
    format!("You escaped in {moves}! Type 'new' for the next round.")
}

fn describe_round(info: &RoundInfo) -> String {
    let gates = match info.gates {
        0 => "no gates".to_string(),
        1 => "1 gate".to_string(),
        n => format!("{n} gates"),
    };
    format!(
        "Round {}: a {}x{} maze with {gates}.",
        info.round, info.rows, info.cols
    )
}

fn describe_outcome(outcome: &ActionOutcome) -> String {
    match outcome.action {
        Action::Move(step) => format!("You move {} to {}.", step.direction, outcome.position),
        Action::PickUp(_) => format!("You pick up the {}.", held_name(outcome.held)),
        Action::Drop(_) => "You drop what you were holding.".to_string(),
        Action::Use(target) => format!("The way {} is clear.", target.direction),
    }
}

fn describe_view(view: &Inspection) -> String {
    let exits: Vec<String> = view
        .exits
        .iter()
        .map(|passage| match passage.blocker {
            Some(blocker) => format!("{} (blocked by a {blocker})", passage.direction),
            None => passage.direction.to_string(),
        })
        .collect();

    let mut lines = vec![format!("You are at {}.", view.position)];
    lines.push(if exits.is_empty() {
        "There is no way out of this cell.".to_string()
    } else {
        format!("Passages: {}.", exits.join(", "))
    });
    if let Some(item) = view.collectible {
        lines.push(format!("A {item} lies here."));
    }
    lines.push(format!("Holding: {}.", held_name(view.held)));
    lines.push(match view.exit {
        Some(exit) => format!("The exit is at {exit}."),
        None => "You have not seen the exit yet.".to_string(),
    });
    lines.push(format!("Moves: {}.", view.moves));
    lines.join("\n")
}

fn held_name(held: Option<ItemKind>) -> String {
    held.map_or_else(|| "nothing".to_string(), |item| item.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::MazeConfig;
    use maze_runtime::RuntimeConfig;

    fn play(rows: usize, cols: usize, script: &str) -> String {
        let config = RuntimeConfig::new(MazeConfig::new(rows, cols)).with_seed(4);
        let mut session = Session::new(config).unwrap();
        let mut output = Vec::new();
        run(&mut session, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn escaping_a_two_cell_maze() {
        let output = play(1, 2, "look\neast\nquit\n");
        assert!(output.starts_with("Round 1: a 1x2 maze with no gates."));
        assert!(output.contains("Passages: east."));
        assert!(output.contains("You move east to (0, 1)."));
        assert!(output.contains("You escaped in 1 move!"));
        assert!(output.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn single_cell_round_is_escaped_on_arrival() {
        let output = play(1, 1, "east\nnew\n");
        assert_eq!(output.matches("You escaped in 0 moves!").count(), 1);
        assert!(output.contains("round 1 is over"));
        assert!(output.contains("Round 2: a 2x2 maze"));
    }

    #[test]
    fn bad_input_is_explained() {
        let output = play(1, 2, "fly\nmove sideways\nwest\n");
        assert!(output.contains("unknown command 'fly'"));
        assert!(output.contains("'sideways' is not a direction"));
        assert!(output.contains("a wall blocks the way west"));
    }

    #[test]
    fn dump_prints_json() {
        let output = play(2, 2, "dump\n");
        let start = output.find('{').unwrap();
        let json: serde_json::Value = serde_json::from_str(&output[start..]).unwrap();
        assert_eq!(json["rows"], 2);
        assert_eq!(json["player"]["moves"], 0);
    }
}
