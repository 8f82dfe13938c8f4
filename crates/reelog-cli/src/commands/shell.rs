//! Interactive session: navigate between pages and dispatch commands, with
//! the store's render callback redrawing the screen after every change.

use super::App;
use crate::output::Output;
use crate::routes::Route;
use crate::views::{self, ViewContext};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_track_core::{Command, CommandError, StoreState, COMMAND_HELP};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const PROMPT: &str = "reelog> ";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// One line of shell input.
#[derive(Debug, PartialEq)]
pub enum ShellInput {
    Empty,
    Quit,
    Help,
    Navigate(Route),
    Command(Result<Command, CommandError>),
}

impl ShellInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => ShellInput::Empty,
            "quit" | "exit" | "q" => ShellInput::Quit,
            "help" | "?" => ShellInput::Help,
            path if path.starts_with('/') => ShellInput::Navigate(Route::from_path(path)),
            other => ShellInput::Command(other.parse()),
        }
    }
}

fn help_text() -> String {
    let mut lines = vec![format!("{}", "Commands".bold())];
    let navigation = [
        ("/browse", "Go to the browse page"),
        ("/watchlist", "Go to your watchlist"),
        ("/watched", "Go to your watched movies"),
        ("help", "Show this help"),
        ("quit", "Leave the shell"),
    ];
    for (usage, description) in COMMAND_HELP.iter().chain(navigation.iter()) {
        lines.push(format!("  {:<28} {}", usage, description));
    }
    lines.join("\n")
}

/// Confirmation for commands whose effect is not visible on the current page.
fn success_message(command: &Command) -> Option<&'static str> {
    match command {
        Command::SaveReview { .. } => Some(super::movie::REVIEW_SAVED),
        _ => None,
    }
}

fn draw(route: &Route, state: &StoreState, ctx: &ViewContext, output: &Output, clear: bool) {
    if clear {
        print!("{}", CLEAR_SCREEN);
    }
    output.view(views::render_screen(route, state, ctx));
}

pub async fn run_shell(app: App, output: &Output) -> Result<()> {
    let route = Arc::new(Mutex::new(Route::default()));
    let clear = std::io::stdout().is_terminal();

    {
        let route = Arc::clone(&route);
        let ctx = app.view.clone();
        let output = *output;
        app.store.set_render_callback(move |state| {
            let current = route.lock().map(|r| r.clone()).unwrap_or_default();
            draw(&current, state, &ctx, &output, clear);
        });
    }

    info!("Starting shell session");
    app.store.load_all().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        output.print(PROMPT)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match ShellInput::parse(&line) {
            ShellInput::Empty => {}
            ShellInput::Quit => break,
            ShellInput::Help => output.info(help_text()),
            ShellInput::Navigate(target) => {
                debug!(route = %target, "Navigating");
                *route.lock().map_err(|_| eyre!("Route lock poisoned"))? = target;
                app.store.notify();
            }
            ShellInput::Command(Err(e)) => output.error(format!("{}. Type 'help' for commands.", e)),
            ShellInput::Command(Ok(command)) => {
                if command.is_destructive() && !confirm(&app, &command, &mut lines, output).await? {
                    output.info("Nothing deleted");
                    continue;
                }
                let done = success_message(&command);
                match app.store.dispatch(command).await {
                    Ok(()) => {
                        if let Some(message) = done {
                            output.success(message);
                        }
                    }
                    Err(e) => output.error(e.to_string()),
                }
            }
        }
    }

    info!("Shell session ended");
    Ok(())
}

/// Asks on the next input line; anything but `y`/`yes` declines.
async fn confirm<R>(
    app: &App,
    command: &Command,
    lines: &mut tokio::io::Lines<R>,
    output: &Output,
) -> Result<bool>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    let Command::Delete(id) = command else {
        return Ok(true);
    };
    // Unknown ids fall through to dispatch, which reports them.
    let Some(movie) = app.store.find_by_id(*id) else {
        return Ok(true);
    };

    output.print(format!("{} [y/N] ", super::movie::delete_prompt(&movie)))?;
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
