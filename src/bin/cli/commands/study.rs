use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use flashlink_lib::study::{StudyOptions, StudyState};

use crate::app::App;
use crate::render::{paint, Color};

enum Reply {
    Yes,
    No,
    Quit,
}

fn prompt(stdin: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

fn ask_correct(stdin: &mut impl BufRead) -> Result<Reply> {
    loop {
        match prompt(stdin, "Correct? [y/n/q] ")?.as_deref() {
            None | Some("q") => return Ok(Reply::Quit),
            Some("y") | Some("yes") => return Ok(Reply::Yes),
            Some("n") | Some("no") => return Ok(Reply::No),
            Some(_) => continue,
        }
    }
}

pub fn run(app: &App, input: &str, shuffle: bool, flipped: bool, use_color: bool) -> Result<()> {
    let list = app
        .codec
        .decode_fragment(input)
        .context("Link does not contain a valid flashcard set")?;

    if list.cards.is_empty() {
        println!("This flashcard set is empty.");
        return Ok(());
    }

    let title = list.title.clone();
    let mut state = StudyState::new(list);
    state.set_options(StudyOptions {
        shuffle_orders: shuffle,
        flipped,
    });
    let mut rng = rand::thread_rng();
    state.start_study(&mut rng);

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        while !state.is_complete {
            let Some(faces) = state.current_faces() else { break };
            let (question, answer) = (faces.question.to_string(), faces.answer.to_string());

            println!();
            println!(
                "{} {}",
                paint(&title, Color::BOLD, use_color),
                paint(
                    &format!("{} / {}", state.session.current_index + 1, state.study_cards.len()),
                    Color::DIM,
                    use_color
                )
            );
            println!("  Q: {}", question);
            if prompt(&mut stdin, "  (press Enter to reveal) ")?.is_none() {
                return Ok(());
            }
            state.flip_card();
            println!("  A: {}", paint(&answer, Color::CYAN, use_color));

            match ask_correct(&mut stdin)? {
                Reply::Yes => state.answer_card(true),
                Reply::No => state.answer_card(false),
                Reply::Quit => return Ok(()),
            }
        }

        println!();
        println!(
            "Finished: {} / {} correct ({}%)",
            state.session.correct_answers,
            state.session.total_answered,
            state.percentage()
        );

        let missed = state.session.incorrect_cards.len();
        if missed == 0 {
            println!("{}", paint("Every card answered correctly!", Color::GREEN, use_color));
            return Ok(());
        }

        let question = format!(
            "{} card{} need{} more practice. Study incorrect only? [y/n] ",
            missed,
            if missed == 1 { "" } else { "s" },
            if missed == 1 { "s" } else { "" }
        );
        match prompt(&mut stdin, &paint(&question, Color::RED, use_color))?.as_deref() {
            Some("y") | Some("yes") => state.start_incorrect_only(&mut rng),
            _ => return Ok(()),
        }
    }
}
