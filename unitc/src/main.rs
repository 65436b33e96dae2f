use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use unitc::{convert_lines, default_registry, parse_and_convert, Registry};

mod args;
use args::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(2);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = default_registry();

    if let Some(category) = cli.list.as_deref() {
        cmd_list(&registry, category);
        return Ok(());
    }
    if let Some(path) = &cli.batch {
        let text = std::fs::read_to_string(path)?;
        for line in convert_lines(&registry, &text, cli.deg) {
            println!("{line}");
        }
        return Ok(());
    }
    if cli.repl || cli.expr.is_empty() {
        return cmd_repl(&registry, cli.deg);
    }
    cmd_convert(&registry, &cli.expr.join(" "), cli.deg, cli.json)
}

fn cmd_list(registry: &Registry, category: &str) {
    if category.is_empty() {
        for name in registry.list_categories() {
            println!("{name}");
        }
        return;
    }
    let units = registry.list_units(category);
    if units.is_empty() {
        println!("No such category: {category}");
        return;
    }
    for unit in units {
        println!("{unit}");
    }
}

fn cmd_convert(
    registry: &Registry,
    expr: &str,
    degrees: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = parse_and_convert(registry, expr, degrees)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{conversion}");
    }
    Ok(())
}

fn cmd_repl(registry: &Registry, mut degrees: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("Unit Converter REPL");
    println!("Commands:");
    println!("  <expr> like:  3 ft to cm   |  5 kg in lb  |  convert 100 kph to mph");
    println!("  :list              list categories");
    println!("  :list <category>   list units");
    println!("  :deg / :rad        trig mode for math in the value");
    println!("  :quit / :q / :exit leave");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("» ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            ":quit" | ":q" | ":exit" => return Ok(()),
            ":deg" => {
                degrees = true;
                println!("Trig mode: degrees");
            }
            ":rad" => {
                degrees = false;
                println!("Trig mode: radians");
            }
            _ if line.starts_with(":list") => {
                let category = line.split_whitespace().nth(1).unwrap_or("");
                cmd_list(registry, category);
            }
            expr => match parse_and_convert(registry, expr, degrees) {
                Ok(conversion) => println!("{conversion}"),
                Err(e) => println!("Error: {e}"),
            },
        }
    }
}
