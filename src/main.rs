mod cli;
mod error_handling;
mod generator;
mod grammar;
mod parser;
mod recognizer;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    let grammar = match parser::parse_file(&args.file) {
        Ok(grammar) => grammar,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            std::process::exit(1);
        }
    };

    let grammar = match &args.start {
        Some(start) => match grammar.with_axiom(start) {
            Some(grammar) => grammar,
            None => {
                eprintln!("No symbol named `{}` in grammar {}", start, grammar.name());
                std::process::exit(1);
            }
        },
        None => grammar,
    };

    if let Some(amount) = args.generate {
        for _ in 0..amount {
            println!("{}", generator::generate(&grammar).join(" "));
        }
        return;
    }

    let word: Vec<String> = args
        .sentence
        .iter()
        .flat_map(|chunk| chunk.split_whitespace())
        .map(String::from)
        .collect();

    let chart = if args.trace {
        print!("{}", grammar);
        recognizer::parse_with_observer(&grammar, &word, &mut |item, reason| {
            println!("{}: {}", reason, item);
        })
    } else {
        recognizer::parse(&grammar, &word)
    };

    if args.chart {
        print!("{}", chart);
    }

    if recognizer::accepts(&grammar, &word, &chart) {
        println!("Accepted");
    } else {
        println!("Rejected");
        std::process::exit(1);
    }
}
