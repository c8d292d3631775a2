use clap::Parser;
use log::LevelFilter;

use rcalc::repl::DEFAULT_EXIT_KEYWORD;
use rcalc::{evaluate_expression, ReplConfig, ReplOutcome, ReplSession};

#[derive(Debug, Parser)]
#[command(
    name = "rcalc",
    version,
    about = "Integer arithmetic calculator with an interactive REPL",
    long_about = "rcalc evaluates integer expressions built from + - * / and parentheses.\n\n\
        Without arguments it starts a REPL; enter `exit` to leave.\n\n\
        EXAMPLES:\n\
        \n  rcalc                      Start the REPL\
        \n  rcalc -e '(1 + 2) * 3'     Evaluate one expression and print it\
        \n  rcalc --diagnostics        Show caret diagnostics for errors"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Evaluate a single expression instead of starting the REPL
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Print a source snippet with a caret under failing input
    #[arg(long)]
    diagnostics: bool,

    /// Line that ends the REPL session
    #[arg(long, value_name = "WORD", default_value = DEFAULT_EXIT_KEYWORD)]
    exit_keyword: String,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG still wins over the flag
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn run_eval(input: &str, diagnostics: bool) -> i32 {
    match evaluate_expression(input) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(e) => {
            if diagnostics {
                eprint!("{}", e.render(input));
            } else {
                eprintln!("error: {e}");
            }
            1
        }
    }
}

fn run_repl(config: ReplConfig) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(config);
    loop {
        let prompt = session.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let outcome = session.handle_line(&line);
                if let Some(text) = outcome.render() {
                    println!("{text}");
                }
                if outcome == ReplOutcome::Exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("{cli:?}");

    match cli.eval {
        Some(input) => run_eval(&input, cli.diagnostics),
        None => run_repl(ReplConfig {
            exit_keyword: cli.exit_keyword,
            diagnostics: cli.diagnostics,
        }),
    }
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_start_repl() {
        let cli = Cli::try_parse_from(["rcalc"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.eval, None);
        assert!(!cli.diagnostics);
        assert_eq!(cli.exit_keyword, "exit");
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["rcalc", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3, "verbose count should be 3 for -vvv");
        assert_eq!(level_for(cli.verbose), LevelFilter::Trace);
        assert_eq!(level_for(0), LevelFilter::Warn);
    }

    #[test]
    fn cli_parses_eval_and_options() {
        let cli = Cli::try_parse_from([
            "rcalc",
            "-e",
            "1 + 2",
            "--diagnostics",
            "--exit-keyword",
            "quit",
        ])
        .unwrap();
        assert_eq!(cli.eval.as_deref(), Some("1 + 2"));
        assert!(cli.diagnostics);
        assert_eq!(cli.exit_keyword, "quit");
    }

    #[test]
    fn eval_exit_codes() {
        assert_eq!(run_eval("(1 + 2) * 3", false), 0);
        assert_eq!(run_eval("1 / 0", false), 1);
        assert_eq!(run_eval("1 +", true), 1);
    }

    #[test]
    fn cli_help_contains_expected_content() {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        cmd.write_long_help(&mut buf).unwrap();
        let help = String::from_utf8(buf).unwrap();

        assert!(help.contains("rcalc"));
        assert!(help.contains("EXAMPLES"));
        assert!(help.contains("--eval"));
        assert!(help.contains("--exit-keyword"));
    }
}
