use std::fs;

use clap::{Parser, ValueEnum};
use gramex::{
    evaluate_source,
    grammar::{Grammar, boolean::boolean_grammar, real::real_grammar, testing::test_grammar},
    interpreter::{
        evaluator::core::{Bindings, evaluate},
        lexer::tokenize,
        parser::core::build_tree,
        semantic::build_semantic_tree,
    },
};

/// gramex parses and evaluates expressions in a configurable operator
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The grammar to parse with.
    #[arg(short, long, value_enum, default_value_t = GrammarChoice::Real)]
    grammar: GrammarChoice,

    /// Print the token list.
    #[arg(long)]
    tokens: bool,

    /// Print the token tree.
    #[arg(long)]
    tree: bool,

    /// Print the semantic tree.
    #[arg(long)]
    semantic: bool,

    /// Bind a variable, as NAME=EXPRESSION. May be repeated.
    #[arg(short, long = "bind", value_name = "NAME=EXPRESSION", value_parser = parse_binding)]
    bindings: Vec<(String, String)>,

    /// Tells gramex to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

/// The bundled grammars.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum GrammarChoice {
    /// Real arithmetic.
    Real,
    /// Boolean algebra.
    Boolean,
    /// The small test grammar.
    Test,
}

impl GrammarChoice {
    fn grammar(self) -> Grammar {
        match self {
            Self::Real => real_grammar(),
            Self::Boolean => boolean_grammar(),
            Self::Test => test_grammar(),
        }
    }
}

fn parse_binding(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
       .map(|(name, value)| (name.trim().to_string(), value.to_string()))
       .filter(|(name, _)| !name.is_empty())
       .ok_or_else(|| format!("expected NAME=EXPRESSION, found '{arg}'"))
}

fn run(args: &Args, source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let grammar = args.grammar.grammar();

    let mut bindings = Bindings::new();
    for (name, expression) in &args.bindings {
        let value = evaluate_source(expression, &grammar, &bindings)?;
        log::debug!("bound '{name}' to {value}");
        bindings.insert(grammar.canonical(name), value);
    }

    let tokens = tokenize(source, &grammar)?;
    if args.tokens {
        for token in &tokens {
            println!("{:>4}  {:<20} {}", token.position, format!("{:?}", token.kind), token.text);
        }
    }

    let tree = build_tree(&tokens, &grammar)?;
    if args.tree {
        println!("{tree}");
    }

    let semantic = build_semantic_tree(&tree, &grammar)?;
    if args.semantic {
        println!("{semantic}");
    }

    println!("{}", evaluate(&semantic, &bindings)?);
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = run(&args, source.trim()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
