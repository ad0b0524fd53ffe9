pub mod command;
pub mod render;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use tally_core::config::AppConfig;
use tally_core::Session;
use tracing::info;

use self::command::Command;

/// What the shell should do after dispatching one command.
enum Feedback {
    Silent,
    Message(String),
    Notice(String),
    Quit,
}

fn apply(session: &mut Session, command: Command, currency_symbol: &str) -> Feedback {
    match command {
        Command::List => Feedback::Silent,
        Command::ToggleForm => {
            session.toggle_form();
            info!(
                event_name = "session.form.toggled",
                open = session.form_open(),
                "add-item form visibility flipped"
            );
            Feedback::Silent
        }
        Command::Select(row) => {
            let product_id = row
                .checked_sub(1)
                .and_then(|index| session.catalog().products().get(index))
                .map(|product| product.id.clone());
            // Out-of-range rows fall through like unknown ids: silently.
            if let Some(product_id) = &product_id {
                session.toggle_product(product_id);
                info!(
                    event_name = "session.catalog.toggled",
                    product_id = %product_id,
                    bill = %session.bill(),
                    "product selection toggled"
                );
            }
            Feedback::Silent
        }
        Command::Name(raw) => {
            session.set_form_name(&raw);
            Feedback::Silent
        }
        Command::Amount(raw) => {
            session.set_form_amount(&raw);
            Feedback::Silent
        }
        Command::Price(raw) => {
            session.set_form_price(&raw);
            Feedback::Silent
        }
        Command::Submit => {
            match session.submit_form() {
                Some(product_id) => {
                    info!(
                        event_name = "session.form.submitted",
                        product_id = %product_id,
                        products = session.catalog().len(),
                        "product appended from form"
                    );
                }
                None => {
                    info!(
                        event_name = "session.form.rejected",
                        "form submission aborted silently"
                    );
                }
            }
            Feedback::Silent
        }
        Command::Balance(raw) => {
            session.set_balance(&raw);
            Feedback::Silent
        }
        Command::Calculate => {
            let outcome = session.evaluate_bill();
            info!(
                event_name = "session.bill.evaluated",
                outcome = ?outcome,
                "balance compared against bill"
            );
            match outcome {
                Some(outcome) => Feedback::Notice(outcome.notice(currency_symbol)),
                None => Feedback::Silent,
            }
        }
        Command::Help => Feedback::Message(command::HELP_TEXT.to_string()),
        Command::Quit => Feedback::Quit,
    }
}

/// Interactive loop: redraw, prompt, dispatch. Outcome notices block until
/// Enter, standing in for the modal alert of the original widget.
pub fn interactive(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();
    let currency_symbol = &config.display.currency_symbol;

    loop {
        write!(stdout, "{}\n> ", render::screen(&session, currency_symbol))?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(stdout, "{error}")?;
                continue;
            }
        };

        match apply(&mut session, command, currency_symbol) {
            Feedback::Silent => {}
            Feedback::Message(message) => writeln!(stdout, "{message}")?,
            Feedback::Notice(text) => {
                write!(stdout, "{}", render::notice(&text))?;
                write!(stdout, "[press Enter to continue] ")?;
                stdout.flush()?;
                let mut ack = String::new();
                if stdin.lock().read_line(&mut ack)? == 0 {
                    break;
                }
            }
            Feedback::Quit => break,
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct ScriptSummary {
    products: usize,
    selected: usize,
    bill: String,
    balance: String,
    form_open: bool,
}

/// Script mode: the same commands, read until EOF without redrawing. Parse
/// errors and notices print inline; the final line is a JSON state summary.
pub fn script<R: BufRead>(input: R, config: &AppConfig) -> Result<String> {
    let mut session = Session::new();
    let currency_symbol = &config.display.currency_symbol;
    let mut out = String::new();

    for line in input.lines() {
        let line = line?;
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                out.push_str(&format!("error: {error}\n"));
                continue;
            }
        };

        match apply(&mut session, command, currency_symbol) {
            Feedback::Silent => {}
            Feedback::Message(message) => {
                out.push_str(&message);
                out.push('\n');
            }
            Feedback::Notice(text) => {
                out.push_str(&text);
                out.push('\n');
            }
            Feedback::Quit => break,
        }
    }

    let summary = ScriptSummary {
        products: session.catalog().len(),
        selected: session.selected_prices().len(),
        bill: session.bill().to_string(),
        balance: session.evaluator().balance().raw().to_string(),
        form_open: session.form_open(),
    };
    out.push_str(&serde_json::to_string(&summary)?);
    out.push('\n');

    Ok(out)
}
