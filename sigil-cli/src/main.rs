//! Sigil CLI - build CSS selectors from fragment tokens
//!
//! Usage:
//!   sigil element=div id=main class=container
//!   sigil element=div combine=+ element=table id=data
//!   sigil --json element=a 'attr=href$=".png"' pseudo-class=focus
//!
//! Each token is `kind=value`. `kind` is a fragment category (`element`,
//! `id`, `class`, `attr`, `pseudo-class`, `pseudo-element`) or `combine`,
//! which joins everything so far to the selector that follows.

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use sigil_common::warning::warning_count;
use sigil_selector::{Combinator, Fragment, Selector};

#[derive(Parser)]
#[command(name = "sigil")]
#[command(about = "Build a CSS selector from ordered fragment tokens")]
struct Cli {
    /// Fragment tokens in order, e.g. `element=div` `class=box` `combine=>`
    #[arg(required = true, value_name = "KIND=VALUE")]
    tokens: Vec<String>,

    /// Print the selector and its specificity as JSON
    #[arg(short, long)]
    json: bool,

    /// Do not summarize warnings on stderr
    #[arg(short, long)]
    quiet: bool,
}

/// One parsed command-line token.
enum Token {
    Fragment(Fragment, String),
    Combine(Combinator),
}

fn parse_token(raw: &str) -> Result<Token> {
    let (kind, value) = raw
        .split_once('=')
        .with_context(|| format!("token {raw:?} is not of the form KIND=VALUE"))?;

    if kind == "combine" {
        let combinator = value
            .parse::<Combinator>()
            .with_context(|| format!("in token {raw:?}"))?;
        return Ok(Token::Combine(combinator));
    }

    let fragment = Fragment::from_name(kind).with_context(|| format!("in token {raw:?}"))?;
    Ok(Token::Fragment(fragment, value.to_string()))
}

/// Fold the tokens left to right into a single selector.
fn build(tokens: &[String]) -> Result<Selector> {
    let mut left: Option<(Selector, Combinator)> = None;
    let mut current = Selector::new();

    for raw in tokens {
        match parse_token(raw)? {
            Token::Fragment(fragment, value) => {
                current = current
                    .append(fragment, &value)
                    .with_context(|| format!("cannot append {raw:?} to {:?}", current.render()))?;
            }
            Token::Combine(combinator) => {
                if current.is_empty() {
                    bail!("combine={combinator} has no selector on its left");
                }
                let joined = match left.take() {
                    Some((prefix, pending)) => prefix.combine(pending, &current),
                    None => current,
                };
                left = Some((joined, combinator));
                current = Selector::new();
            }
        }
    }

    match left {
        Some((_, combinator)) if current.is_empty() => {
            bail!("combine={combinator} has no selector on its right")
        }
        Some((prefix, combinator)) => Ok(prefix.combine(combinator, &current)),
        None => Ok(current),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let selector = build(&cli.tokens)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&selector)?);
    } else {
        println!("{selector}");
    }

    let warnings = warning_count();
    if warnings > 0 && !cli.quiet {
        eprintln!(
            "{}",
            format!("{warnings} warning(s) while building selector").yellow()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_build_compound() {
        let selector = build(&tokens(&["element=a", r#"attr=href$=".png""#, "pseudo-class=focus"]))
            .unwrap();
        assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn test_build_combined_chain() {
        let selector = build(&tokens(&[
            "element=div",
            "id=main",
            "combine=+",
            "element=table",
            "id=data",
            "combine= ",
            "element=td",
        ]))
        .unwrap();
        assert_eq!(selector.render(), "div#main + table#data   td");
    }

    #[test]
    fn test_value_may_contain_equals() {
        let selector = build(&tokens(&["attr=type=text"])).unwrap();
        assert_eq!(selector.render(), "[type=text]");
    }

    #[test]
    fn test_empty_valued_fragment_can_be_combined() {
        let selector = build(&tokens(&["element=", "combine=>", "element=p"])).unwrap();
        assert_eq!(selector.render(), " > p");
    }

    #[test]
    fn test_build_errors() {
        assert!(build(&tokens(&["class=x", "id=y"])).is_err());
        assert!(build(&tokens(&["element=div", "element=p"])).is_err());
        assert!(build(&tokens(&["tag=div"])).is_err());
        assert!(build(&tokens(&["div"])).is_err());
        assert!(build(&tokens(&["element=div", "combine=|", "element=p"])).is_err());
        assert!(build(&tokens(&["combine=>", "element=p"])).is_err());
        assert!(build(&tokens(&["element=div", "combine=>"])).is_err());
    }

    #[test]
    fn test_error_message_names_token() {
        let err = build(&tokens(&["class=x", "id=y"])).unwrap_err();
        assert_eq!(err.to_string(), r#"cannot append "id=y" to ".x""#);
        assert!(format!("{err:#}").contains("pseudo-element (got id after class)"));
    }
}
