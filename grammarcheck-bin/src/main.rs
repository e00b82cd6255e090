use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use grammarcheck::lexicon::{shared, Suggestion, WordNet};
use grammarcheck::{
    Analysis, Checker, CheckerConfig, Finding, Lexicon, LexiconSource, Span, Tokenize,
};

trait OutputWriter {
    fn write_analysis(&mut self, analysis: &Analysis, highlight: bool);
    fn write_suggestions(
        &mut self,
        word: &str,
        base_forms: &[String],
        suggestions: &[Suggestion],
    );
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_analysis(&mut self, analysis: &Analysis, highlight: bool) {
        for message in analysis.messages() {
            println!("{}", message);
        }

        if highlight && !analysis.is_correct() {
            println!();
            let findings = analysis.report.findings();
            for (finding, span) in findings.iter().zip(analysis.highlights()) {
                match span {
                    Some(span) => println!(
                        "{:>4}..{:<4} \"{}\"\t{}",
                        span.start,
                        span.end,
                        &analysis.text[span.as_range()],
                        finding.message
                    ),
                    None => println!("   -..-    \t{}", finding.message),
                }
            }
        }
    }

    fn write_suggestions(
        &mut self,
        word: &str,
        base_forms: &[String],
        suggestions: &[Suggestion],
    ) {
        if base_forms.is_empty() {
            println!("Input: {}\t\t[UNKNOWN]", &word);
        } else {
            println!("Input: {}\t\t[KNOWN: {}]", &word, base_forms.join(", "));
        }
        for sugg in suggestions {
            println!("{}\t\t{:.3}", sugg.value, sugg.score);
        }
        println!();
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct HighlightedFinding<'a> {
    #[serde(flatten)]
    finding: &'a Finding,
    span: Option<Span>,
}

#[derive(Serialize)]
struct CheckResult<'a> {
    text: &'a str,
    correct: bool,
    messages: Vec<&'a str>,
    findings: Vec<HighlightedFinding<'a>>,
}

#[derive(Serialize)]
struct SuggestionRequest {
    word: String,
    is_known: bool,
    base_forms: Vec<String>,
    suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<serde_json::Value>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }

    fn push<T: Serialize>(&mut self, value: &T) {
        match serde_json::to_value(value) {
            Ok(v) => self.results.push(v),
            Err(e) => eprintln!("Failed to serialize result: {}", e),
        }
    }
}

impl OutputWriter for JsonWriter {
    fn write_analysis(&mut self, analysis: &Analysis, highlight: bool) {
        let spans = if highlight {
            analysis.highlights()
        } else {
            vec![None; analysis.report.len()]
        };
        let result = CheckResult {
            text: &analysis.text,
            correct: analysis.is_correct(),
            messages: analysis.messages(),
            findings: analysis
                .report
                .findings()
                .iter()
                .zip(spans)
                .map(|(finding, span)| HighlightedFinding { finding, span })
                .collect(),
        };
        self.push(&result);
    }

    fn write_suggestions(
        &mut self,
        word: &str,
        base_forms: &[String],
        suggestions: &[Suggestion],
    ) {
        self.push(&SuggestionRequest {
            word: word.to_owned(),
            is_known: !base_forms.is_empty(),
            base_forms: base_forms.to_vec(),
            suggestions: suggestions.to_vec(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(v) => println!("{}", v),
            Err(e) => eprintln!("Failed to serialize results: {}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "check a paragraph for grammar issues")]
    Check(CheckArgs),

    #[options(help = "get suggestions for provided words")]
    Suggest(SuggestArgs),

    #[options(help = "print input in tokenized form")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "WordNet dictionary directory to be used")]
    wordnet: Option<PathBuf>,

    #[options(help = "JSON file with checker configuration")]
    config: Option<PathBuf>,

    #[options(help = "maximum number of suggestions per word")]
    nbest: Option<usize>,

    #[options(no_short, help = "minimum similarity for suggestions (0.0 to 1.0)")]
    cutoff: Option<f32>,

    #[options(short = "H", help = "show where each finding is in the text")]
    highlight: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be checked")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "WordNet dictionary directory to be used")]
    wordnet: Option<PathBuf>,

    #[options(help = "maximum number of results")]
    nbest: Option<usize>,

    #[options(no_short, help = "minimum similarity for suggestions (0.0 to 1.0)")]
    cutoff: Option<f32>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "w", long = "words", help = "show words only")]
    is_words_only: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn read_input(inputs: Vec<String>) -> anyhow::Result<String> {
    if inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        Ok(buffer)
    } else {
        Ok(inputs.join(" "))
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CheckerConfig> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(CheckerConfig::default()),
    }
}

fn apply_overrides(
    config: &mut CheckerConfig,
    nbest: Option<usize>,
    cutoff: Option<f32>,
) -> anyhow::Result<()> {
    if let Some(v) = nbest {
        config.n_best = v;
    }

    if let Some(v) = cutoff {
        if !(0.0..=1.0).contains(&v) {
            anyhow::bail!("--cutoff must be between 0.0 and 1.0, got {}", v);
        }
        config.cutoff = v;
    }

    Ok(())
}

fn writer(use_json: bool) -> Box<dyn OutputWriter> {
    if use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    }
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs = read_input(args.inputs)?;

    if args.is_words_only {
        for token in inputs.tokens().into_iter().filter(|t| t.is_word()) {
            println!("{:>4}: \"{}\"", token.index, token.text);
        }
    } else {
        for token in inputs.tokens() {
            println!("{:>4}: {:<12} \"{}\"", token.index, format!("{:?}", token.kind), token.text);
        }
    }

    Ok(())
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args.nbest, args.cutoff)?;

    let text = read_input(args.inputs)?;
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Please enter a paragraph to check.");
    }

    let checker = Checker::new(LexiconSource::Shared(args.wordnet), &config);
    let analysis = checker.check(text);

    let mut writer = writer(args.use_json);
    writer.write_analysis(&analysis, args.highlight);
    writer.finish();

    Ok(())
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let mut config = CheckerConfig::default();
    apply_overrides(&mut config, args.nbest, args.cutoff)?;

    let lexicon: Arc<WordNet> = match args.wordnet.as_deref() {
        Some(path) => Arc::new(WordNet::open(path)?),
        None => shared::wordnet(None)?,
    };

    let words = read_input(args.inputs)?;
    let mut writer = writer(args.use_json);

    for word in words.split_whitespace() {
        let base_forms: Vec<String> = lexicon
            .lemmatize(word)
            .iter()
            .map(|form| form.to_string())
            .collect();
        let suggestions = if base_forms.is_empty() {
            lexicon.suggest(word, config.n_best, config.cutoff)
        } else {
            vec![]
        };
        writer.write_suggestions(word, &base_forms, &suggestions);
    }

    writer.finish();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Check(args)) => check(args),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
