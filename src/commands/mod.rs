mod add;
mod edit;
mod goto;
mod help;
mod mark;
mod quit;
mod recall;
mod remove;
mod select;

use crate::{console::ConsoleWidget, state::AppState};

pub fn register_all(console: &mut ConsoleWidget<AppState>) {
    console.register(add::create());
    console.register(remove::create());
    console.register(recall::create());
    console.register(mark::create());
    console.register(edit::create());
    console.register(goto::create());
    console.register(select::create());
    console.register(help::create());
    console.register(quit::create());
}

/// Parse a 1-based record number from a console argument.
fn parse_record_number(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number - 1),
        _ => Err(format!("Invalid record number: {}", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_number_is_one_based() {
        assert_eq!(parse_record_number("1").unwrap(), 0);
        assert_eq!(parse_record_number("12").unwrap(), 11);
    }

    #[test]
    fn test_parse_record_number_rejects_zero_and_garbage() {
        assert!(parse_record_number("0").is_err());
        assert!(parse_record_number("-3").is_err());
        assert!(parse_record_number("one").is_err());
    }
}
