//! Katas - coursework exercises from the command line
//!
//! Usage: katas <COMMAND> [ARGS]

use std::env;
use std::process::ExitCode;

use katas_selector::{selector, PartKind, SelectorBuilder};
use katas_values::{to_json, Rectangle};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "--help" | "-h" => {
            print_usage(&args[0]);
            return ExitCode::SUCCESS;
        }
        "--version" | "-V" => {
            println!("Katas {}", VERSION);
            return ExitCode::SUCCESS;
        }
        "selector" => build_selector(&args[2..]).map(|sel| sel.stringify()),
        "area" => parse_rectangle(&args[2..]).map(|r| r.area().to_string()),
        "json" => parse_rectangle(&args[2..])
            .and_then(|r| to_json(&r).map_err(|e| e.to_string())),
        other => Err(format!("Unknown command '{}'", other)),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Katas {} - coursework exercises

USAGE:
    {} <COMMAND> [ARGS]

COMMANDS:
    selector <KIND=VALUE>... [--combine <TOKEN> <KIND=VALUE>...]
                          Build a CSS selector. KIND is one of element, id,
                          class, attr, pseudo-class, pseudo-element
    area <WIDTH> <HEIGHT> Print the area of a rectangle
    json <WIDTH> <HEIGHT> Print a rectangle as JSON

OPTIONS:
    -h, --help            Print this help message
    -V, --version         Print version information

EXAMPLES:
    {} selector element=a 'attr=href$=".png"' pseudo-class=focus
    {} selector element=div id=main --combine + element=table id=data
    {} area 10 20

"#,
        VERSION, program, program, program, program
    );
}

/// Build a selector from `kind=value` arguments. Each `--combine TOKEN`
/// joins everything before it with the chain that follows.
fn build_selector(args: &[String]) -> Result<SelectorBuilder, String> {
    if args.is_empty() {
        return Err("selector needs at least one KIND=VALUE part".to_string());
    }

    let mut combined: Option<(SelectorBuilder, String)> = None;
    let mut current = selector();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--combine" {
            let token = iter
                .next()
                .ok_or_else(|| "--combine needs a combinator token".to_string())?;
            let left = close_chain(combined.take(), current);
            log::debug!("Combining '{}' with '{}'", left, token);
            combined = Some((left, token.clone()));
            current = selector();
            continue;
        }

        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Expected KIND=VALUE, got '{}'", arg))?;
        let kind = PartKind::from_name(name).ok_or_else(|| format!("Unknown part kind '{}'", name))?;
        current = current.append(kind, value).map_err(|e| e.to_string())?;
    }

    Ok(close_chain(combined, current))
}

fn close_chain(pending: Option<(SelectorBuilder, String)>, right: SelectorBuilder) -> SelectorBuilder {
    match pending {
        Some((left, token)) => selector().combine(&left, &token, &right),
        None => right,
    }
}

fn parse_rectangle(args: &[String]) -> Result<Rectangle, String> {
    let [width, height] = args else {
        return Err("expected <WIDTH> <HEIGHT>".to_string());
    };
    let width: f64 = width.parse().map_err(|_| format!("Invalid width '{}'", width))?;
    let height: f64 = height.parse().map_err(|_| format!("Invalid height '{}'", height))?;
    Ok(Rectangle::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_simple_selector() {
        let sel = build_selector(&args(&["element=a", "attr=href$=\".png\"", "pseudo-class=focus"])).unwrap();
        assert_eq!(sel.stringify(), "a[href$=\".png\"]:focus");
    }

    #[test]
    fn test_build_combined_selector() {
        let sel = build_selector(&args(&[
            "element=div", "id=main", "--combine", "+", "element=table", "id=data",
        ]))
        .unwrap();
        assert_eq!(sel.stringify(), "div#main + table#data");
    }

    #[test]
    fn test_build_chained_combines() {
        let sel = build_selector(&args(&[
            "element=ul", "--combine", ">", "element=li", "--combine", "~", "class=x",
        ]))
        .unwrap();
        assert_eq!(sel.stringify(), "ul > li ~ .x");
    }

    #[test]
    fn test_build_selector_errors() {
        assert!(build_selector(&[]).is_err());
        assert!(build_selector(&args(&["div"])).unwrap_err().contains("KIND=VALUE"));
        assert!(build_selector(&args(&["tag=div"])).unwrap_err().contains("Unknown part kind"));
        assert!(build_selector(&args(&["element=a", "--combine"])).is_err());

        let err = build_selector(&args(&["id=a", "element=b"])).unwrap_err();
        assert!(err.starts_with("Selector parts should be arranged"));

        let err = build_selector(&args(&["id=a", "id=b"])).unwrap_err();
        assert!(err.contains("more than one time"));
    }

    #[test]
    fn test_parse_rectangle() {
        let r = parse_rectangle(&args(&["10", "2.5"])).unwrap();
        assert_eq!(r.area(), 25.0);
        assert!(parse_rectangle(&args(&["10"])).is_err());
        assert!(parse_rectangle(&args(&["ten", "2"])).is_err());
    }
}
