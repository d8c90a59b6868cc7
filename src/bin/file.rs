use rpn::{session::Response, *};
use std::{env, error::Error, fs};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    // Skip the program name
    let mut args = env::args().skip(1);
    let Some(file_name) = args.next() else {
        println!("Usage: file [script]");
        return Ok(());
    };

    let source = fs::read_to_string(&file_name)
        .map_err(|error| format!("Failed to read \"{file_name}\": {error}"))?;

    let mut session = session::Session::new();
    for (number, line) in source.lines().enumerate() {
        match session.respond(line) {
            Response::Skip => {}
            Response::Quit => break,
            value @ Response::Value(_) => println!("{value}"),
            error @ Response::Error(_) => eprintln!("[line {}] {error}", number + 1),
        }
    }

    Ok(())
}
