use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tally::{strip_whitespace, Session};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let mut session = Session::new();
    let mut rl = DefaultEditor::new()?;
    loop {
        let readline = rl.readline("tally> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let line = strip_whitespace(&line);

                match session.eval_line(&line) {
                    Ok(value) => {
                        println!("{value}");
                    }
                    Err(e) => {
                        eprintln!("Error: {e}");
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                return Err(e.into());
            }
        }
    }
    Ok(())
}
