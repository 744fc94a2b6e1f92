use std::io::Read;

use swissify::{load_vocabulary, Pipeline, Vocabulary};

const USAGE: &str = "usage: swissify [--lang TAG] [--vocab FILE] [INPUT-FILE]

Adapts German text to Swiss conventions and prints it to stdout.
Reads INPUT-FILE, or stdin when no file is given.

  --lang TAG     target locale tag (default: swiss; unknown tags pass through)
  --vocab FILE   JSON word map {\"Fahrrad\": \"Velo\"}; default: builtin list";

struct Args {
    lang: String,
    vocab: Option<String>,
    input: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        lang: "swiss".to_string(),
        vocab: None,
        input: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => {
                parsed.lang = args.next().ok_or("--lang needs a value")?;
            }
            "--vocab" => {
                parsed.vocab = Some(args.next().ok_or("--vocab needs a value")?);
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}\n\n{}", arg, USAGE));
            }
            _ if parsed.input.is_none() => parsed.input = Some(arg),
            _ => return Err(format!("more than one input file\n\n{}", USAGE)),
        }
    }

    Ok(parsed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(std::env::args().skip(1))?;

    let vocabulary = match &args.vocab {
        Some(path) => load_vocabulary(path)?,
        None => Vocabulary::builtin(),
    };

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let pipeline = Pipeline::new(vocabulary);
    print!("{}", pipeline.adapt_tagged(&text, &args.lang));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.lang, "swiss");
        assert!(args.vocab.is_none());
        assert!(args.input.is_none());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&["--lang", "it-CH", "--vocab", "words.json", "brief.txt"]).unwrap();
        assert_eq!(args.lang, "it-CH");
        assert_eq!(args.vocab.as_deref(), Some("words.json"));
        assert_eq!(args.input.as_deref(), Some("brief.txt"));
    }

    #[test]
    fn test_missing_option_value() {
        assert!(parse(&["--lang"]).is_err());
    }

    #[test]
    fn test_unknown_option() {
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_two_input_files_rejected() {
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }
}
