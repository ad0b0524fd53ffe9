use thiserror::Error;

/// One line of user input, parsed into a session action. Setters carry the
/// raw remainder of the line verbatim; coercion happens in the core layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List,
    ToggleForm,
    Select(usize),
    Name(String),
    Amount(String),
    Price(String),
    Submit,
    Balance(String),
    Calculate,
    Help,
    Quit,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`select` needs a row number, e.g. `select 2`")]
    MissingRow,
    #[error("row `{0}` is not a number")]
    BadRow(String),
}

/// Parse one input line. Blank lines are `None`; they are not commands and
/// not errors.
pub fn parse(line: &str) -> Result<Option<Command>, CommandParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "add" | "close" => Command::ToggleForm,
        "select" | "remove" => {
            if rest.is_empty() {
                return Err(CommandParseError::MissingRow);
            }
            let row = rest
                .parse::<usize>()
                .map_err(|_| CommandParseError::BadRow(rest.to_string()))?;
            Command::Select(row)
        }
        "name" => Command::Name(rest.to_string()),
        "amount" => Command::Amount(rest.to_string()),
        "price" => Command::Price(rest.to_string()),
        "submit" => Command::Submit,
        "balance" => Command::Balance(rest.to_string()),
        "calc" | "calculate" => Command::Calculate,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

pub const HELP_TEXT: &str = "Commands:\n  \
    list                 redraw the product list and bill panel\n  \
    select <row>         toggle selection of the product on that row\n  \
    add                  open or close the add-item form\n  \
    name <text>          set the form's product name\n  \
    amount <text>        set the form's amount\n  \
    price <text>         set the form's price per unit\n  \
    submit               submit the add-item form\n  \
    balance <text>       set your balance\n  \
    calc                 compare your balance against the bill\n  \
    help                 show this help\n  \
    quit                 leave the session";

#[cfg(test)]
mod tests {
    use super::{parse, Command, CommandParseError};

    #[test]
    fn blank_lines_are_not_commands() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn select_takes_a_row_number() {
        assert_eq!(parse("select 2"), Ok(Some(Command::Select(2))));
        assert_eq!(parse("remove 1"), Ok(Some(Command::Select(1))));
    }

    #[test]
    fn select_without_a_row_is_rejected() {
        assert_eq!(parse("select"), Err(CommandParseError::MissingRow));
    }

    #[test]
    fn select_with_a_non_number_is_rejected() {
        assert_eq!(parse("select two"), Err(CommandParseError::BadRow("two".to_string())));
    }

    #[test]
    fn setters_carry_the_rest_of_the_line() {
        assert_eq!(parse("name Tomato Paste"), Ok(Some(Command::Name("Tomato Paste".to_string()))));
        assert_eq!(parse("amount 2"), Ok(Some(Command::Amount("2".to_string()))));
        assert_eq!(parse("balance 15"), Ok(Some(Command::Balance("15".to_string()))));
    }

    #[test]
    fn setters_accept_an_empty_value_to_clear_the_field() {
        assert_eq!(parse("name"), Ok(Some(Command::Name(String::new()))));
        assert_eq!(parse("balance"), Ok(Some(Command::Balance(String::new()))));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse("CALC"), Ok(Some(Command::Calculate)));
        assert_eq!(parse("Quit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn unknown_keywords_are_rejected_with_a_hint() {
        let error = parse("buy 3").expect_err("unknown command");
        assert_eq!(error, CommandParseError::Unknown("buy".to_string()));
        assert!(error.to_string().contains("help"));
    }
}
