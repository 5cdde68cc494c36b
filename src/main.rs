use std::env;
use std::io;
use std::process::ExitCode;

use chess_game::cli::logger;
use chess_game::cli::options::PlayOptions;
use chess_game::cli::Session;

fn main() -> ExitCode {
    let options = match PlayOptions::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: chess_game [--depth N] [--engine white|black|none] [--log-level LEVEL] [--record PATH]");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::init(options.log_level) {
        eprintln!("logger: {e}");
    }

    let mut session = Session::new(options);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match session.run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
