/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Source square and destination token, e.g. `("a7", "a8q")`
    Move(String, String),
    Go,
    Board,
    Status,
    Legal,
    Undo,
    Save(Option<String>),
    Load(Option<String>),
    Perft(usize),
    Set(String, Option<String>),
    New,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  e2e4 | a7a8q | move <from> <to>   play a move
  go                               let the engine move
  board                            show the position
  status                           show check and game state
  legal                            list legal moves
  undo                             take back the last move
  save [path] / load [path]        write or replay a move record
  perft <depth>                    count move paths
  set <option> <value>             depth, engine, log, record
  new                              start a new game
  help | quit";

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let arg = |i: usize| parts.get(i).map(|v| (*v).to_string());

    let cmd = match first.to_ascii_lowercase().as_str() {
        "move" | "m" => match (arg(1), arg(2)) {
            (Some(from), Some(to)) => Command::Move(from, to),
            (Some(token), None) => split_coordinate(&token)
                .unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
            _ => Command::Unknown(trimmed.to_string()),
        },
        "go" => Command::Go,
        "board" | "d" => Command::Board,
        "status" => Command::Status,
        "legal" | "moves" => Command::Legal,
        "undo" => Command::Undo,
        "save" => Command::Save(arg(1)),
        "load" => Command::Load(arg(1)),
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            Command::Perft(depth)
        }
        "set" => match arg(1) {
            Some(name) => Command::Set(name, (parts.len() > 2).then(|| parts[2..].join(" "))),
            None => Command::Unknown(trimmed.to_string()),
        },
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ if parts.len() == 1 => split_coordinate(first)
            .unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// `e2e4` or `a7a8q` as a move command
fn split_coordinate(token: &str) -> Option<Command> {
    if !(4..=5).contains(&token.len()) || !token.is_ascii() {
        return None;
    }
    let bytes = token.as_bytes();
    if !bytes[0].is_ascii_alphabetic() || !bytes[1].is_ascii_digit() {
        return None;
    }
    let (from, to) = token.split_at(2);
    Some(Command::Move(from.to_string(), to.to_string()))
}
