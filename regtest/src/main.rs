/*! Regression testing for the grammar checker

Runs a corpus of paragraphs through the checker and verifies that each one
still produces the message it is expected to. Can be used in automated
scripts to cap the amount of behaviour change between versions.

# Usage examples

It's a command-line tool:
```console
$ cargo run -- --wordnet /usr/share/wordnet --cases cases.tsv --threshold 0.1
```
will expect fewer than 10 % of the cases in `cases.tsv` to be missing their
expected message. Each line of the case file is a paragraph and the expected
message separated by a tab; lines starting with `#` are ignored.
*/

use std::error::Error;
use std::path::PathBuf;

use grammarcheck::{Checker, CheckerConfig, LexiconSource};

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "DICTDIR")]
    wordnet: Option<PathBuf>,
    #[arg(short, long, value_name = "CASEFILE")]
    cases: PathBuf,
    #[arg(short, long, value_name = "THOLD")]
    threshold: f32,
}

fn load_cases(path: PathBuf) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)?;
    Ok(rdr
        .records()
        .filter_map(Result::ok)
        .filter_map(|r| {
            r.get(0)
                .and_then(|x| r.get(1).map(|y| (x.to_string(), y.to_string())))
        })
        .collect())
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let checker = Checker::new(
        LexiconSource::Shared(cli.wordnet.clone()),
        &CheckerConfig::default(),
    );
    let cases = load_cases(cli.cases.clone())?;
    if cases.is_empty() {
        Err(format!("Could not find any cases in {}", cli.cases.display()))?
    }

    let mut failures = 0;
    for (paragraph, expected) in &cases {
        let analysis = checker.check(paragraph.trim());
        let messages = analysis.messages();
        if messages.iter().any(|m| *m == expected.as_str()) {
            print!(".");
        } else {
            println!();
            println!("FAILED: {:?}", paragraph);
            println!("  expected: {}", expected);
            for message in messages {
                println!("  got:      {}", message);
            }
            failures += 1;
        }
    }
    println!();

    let failure_rate = failures as f32 / cases.len() as f32;
    println!(
        "{} of {} cases failed ({:.1}%)",
        failures,
        cases.len(),
        failure_rate * 100.0
    );
    if failure_rate < cli.threshold {
        Ok(())
    } else {
        Err(format!(
            "failures more than threshold {} >= {}",
            failure_rate, cli.threshold
        ))?
    }
}
