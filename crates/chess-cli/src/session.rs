//! The interactive game loop.
//!
//! Reads one command per line and writes prompts, boards and messages back.
//! Rejected input is reported and asked for again; it never ends the session.

use crate::config::CliConfig;
use crate::render::render;
use crate::save;
use chess_core::Piece;
use chess_engine::Game;
use std::io::{BufRead, Write};

const HELP: &str = "\
Moves name the piece, an optional start file or rank, an optional x for a
capture, and the destination: pe4, Nf3, Nbd2, R1a3, Bxc6, N3xe2.
Castle with o-o or o-o-o.
Other commands: board, save, help, quit.";

/// Plays until the game ends, the input runs out or the player quits.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    config: &CliConfig,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut lines = input.lines();
    writeln!(out, "{}", render(&game.view(), config.unicode))?;

    loop {
        if let Some(result) = game.result() {
            writeln!(out, "Game over: {}", result)?;
            return Ok(());
        }

        match game.pending_promotion() {
            Some(sq) => write!(out, "Promote the pawn on {} to (q, r, b, n): ", sq)?,
            None => write!(out, "{} to move: ", game.turn())?,
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => return Ok(()),
            "help" => writeln!(out, "{}", HELP)?,
            "board" => writeln!(out, "{}", render(&game.view(), config.unicode))?,
            "save" => match save::save(game, &config.save_path) {
                Ok(()) => writeln!(out, "Saved to {}", config.save_path.display())?,
                Err(e) => writeln!(out, "Could not save: {}", e)?,
            },
            _ if game.pending_promotion().is_some() => promote(game, config, line, out)?,
            _ => play(game, config, line, out)?,
        }
    }
}

fn play<W: Write>(
    game: &mut Game,
    config: &CliConfig,
    line: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    match game.play(line) {
        Ok(outcome) => {
            if !outcome.promotion_pending {
                writeln!(out, "{}", render(&game.view(), config.unicode))?;
            }
            if outcome.check && outcome.result.is_none() {
                writeln!(out, "Check!")?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn promote<W: Write>(
    game: &mut Game,
    config: &CliConfig,
    line: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut chars = line.chars();
    let kind = match (chars.next(), chars.next()) {
        (Some(c), None) => Piece::from_letter(c),
        _ => None,
    };
    let Some(kind) = kind else {
        writeln!(out, "Enter one of q, r, b, n")?;
        return Ok(());
    };

    match game.promote(kind) {
        Ok(result) => {
            writeln!(out, "{}", render(&game.view(), config.unicode))?;
            if result.is_none() && game.is_in_check(game.turn()) {
                writeln!(out, "Check!")?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}
