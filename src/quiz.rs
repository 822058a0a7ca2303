use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};

use crate::chord::{Evaluation, evaluate};
use crate::diagnostics;
use crate::pitch::ALL;

/// What the player asked for after a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Continue,
    Stop,
}

/// Run the interactive quiz on the terminal
pub fn run(qualities: &[String], logs: &Path, seed: Option<u64>) -> Result<()> {
    let rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let shown = session(&mut input, &mut stdout, qualities, logs, rng)?;
    println!("{} chord{} shown", shown, if shown == 1 { "" } else { "s" });
    Ok(())
}

/// Quiz loop over any input and output. Picks a random root and quality,
/// shows the symbol and schema, then the keyboard on Enter. Ends on
/// "stop" or end of input. Returns how many chords were shown.
pub fn session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    qualities: &[String],
    logs: &Path,
    mut rng: fastrand::Rng,
) -> Result<usize> {
    if qualities.is_empty() {
        bail!("no chord qualities to quiz on");
    }

    let mut shown = 0;
    loop {
        let quality = &qualities[rng.usize(..qualities.len())];
        let root = ALL[rng.usize(..ALL.len())];

        match evaluate(root, quality) {
            Ok(eval) => {
                shown += 1;
                if show(input, out, &eval)? == Next::Stop {
                    break;
                }
            }
            Err(err) => {
                writeln!(out, "Error occurred, please check logs...")?;
                match diagnostics::write_log(logs, &err) {
                    Ok(path) => eprintln!("{} (logged to {})", err, path.display()),
                    Err(e) => eprintln!("{}; could not write log: {:#}", err, e),
                }
                if prompt(input, out, "Press enter for a new chord or type stop: ")? == Next::Stop {
                    break;
                }
            }
        }
        writeln!(out)?;
    }

    Ok(shown)
}

fn show<R: BufRead, W: Write>(input: &mut R, out: &mut W, eval: &Evaluation) -> Result<Next> {
    queue!(
        out,
        PrintStyledContent(eval.symbol.to_string().bold()),
        Print("\n")
    )?;
    if let Some(description) = eval.schema.description() {
        queue!(out, PrintStyledContent(description.dim()), Print("\n"))?;
    }
    writeln!(out, "{}", eval.schema)?;

    if prompt(input, out, "Press enter to unlock Piano View...")? == Next::Stop {
        return Ok(Next::Stop);
    }
    writeln!(out, "{}", eval.note_names().join(" "))?;
    write!(out, "{}", eval.keyboard)?;

    prompt(input, out, "Press enter for a new chord or type stop: ")
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Next> {
    write!(out, "{}", message)?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 || line.trim() == "stop" {
        Ok(Next::Stop)
    } else {
        Ok(Next::Continue)
    }
}
