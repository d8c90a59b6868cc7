use rpn::{lex::Operator, session::Response, *};

fn main() -> Result<(), rustyline::error::ReadlineError> {
    init_tracing();

    let mut rl = rustyline::DefaultEditor::new()?;

    let operators: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
    println!("RPN calculator");
    println!("Operators: {}", operators.join(" "));
    println!("Enter an expression (e.g. \"5 5 +\"), or \"q\" to quit.");

    let mut session = session::Session::new();
    loop {
        match rl.readline("> ") {
            Ok(line) => match session.respond(&line) {
                Response::Skip => {}
                Response::Quit => break,
                value @ Response::Value(_) => println!("{value}"),
                error @ Response::Error(_) => eprintln!("{error}"),
            },
            Err(error) => {
                println!("Bye! ({error})");
                break;
            }
        }
    }

    Ok(())
}
