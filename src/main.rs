mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use post_optimizer::config::EngineConfig;
use post_optimizer::knowledge::{ENGAGEMENT_ACTIONS, PIPELINE_STAGES};
use post_optimizer::{
    analyze_with_config, generate_strategy, generate_variants, optimize_with_config,
    AnalysisResult, AnalyzeOptions, MediaType, Strategy, Variant,
};

#[derive(Parser)]
#[command(name = "post-optimizer", about = "Score and rewrite posts for the X ranking algorithm")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a post and list factors, warnings and recommendations
    Analyze(PostArgs),
    /// Print rewritten variants of a post
    Variants(PostArgs),
    /// Print the posting strategy for a post
    Strategy(PostArgs),
    /// Analysis, variants and strategy in one report
    Optimize(PostArgs),
    Serve(ServeArgs),
    /// Print the effective engine config, or write it to a file
    Config(ConfigArgs),
    /// Describe the ranking pipeline stages and engagement actions
    Pipeline,
}

#[derive(Args, Debug, Clone)]
struct PostArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "none", value_parser = MediaType::parse)]
    media: MediaType,
    #[arg(long)]
    goal: Option<String>,
    #[arg(long)]
    link: bool,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    details: bool,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "web")]
    web_root: String,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    write: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Variants(args) => run_variants(args),
        Command::Strategy(args) => run_strategy(args),
        Command::Optimize(args) => run_optimize(args),
        Command::Serve(args) => {
            let (config, _) = EngineConfig::load(args.config.clone())?;
            server::serve(args, config).await
        }
        Command::Config(args) => run_config(args),
        Command::Pipeline => {
            print_pipeline();
            Ok(())
        }
    }
}

struct PreparedPost {
    text: String,
    options: AnalyzeOptions,
    config: EngineConfig,
}

fn prepare(args: &PostArgs) -> Result<PreparedPost, String> {
    let (config, _) = EngineConfig::load(args.config.clone())?;
    let options = AnalyzeOptions {
        media_type: args.media,
        goal: args.goal.clone(),
        has_link: args.link,
    };
    let text = read_text(args.text.clone())?;
    Ok(PreparedPost {
        text,
        options,
        config,
    })
}

fn run_analyze(args: PostArgs) -> Result<(), String> {
    let post = prepare(&args)?;
    let analysis = analyze_with_config(&post.text, &post.options, &post.config);
    if args.json {
        return print_json(&analysis);
    }
    print_analysis(&analysis, args.details);
    Ok(())
}

fn run_variants(args: PostArgs) -> Result<(), String> {
    let post = prepare(&args)?;
    let analysis = analyze_with_config(&post.text, &post.options, &post.config);
    let variants = generate_variants(&post.text, &analysis, &post.options);
    if args.json {
        return print_json(&variants);
    }
    print_variants(&variants);
    Ok(())
}

fn run_strategy(args: PostArgs) -> Result<(), String> {
    let post = prepare(&args)?;
    let analysis = analyze_with_config(&post.text, &post.options, &post.config);
    let strategy = generate_strategy(&analysis, &post.options);
    if args.json {
        return print_json(&strategy);
    }
    print_strategy(&strategy);
    Ok(())
}

fn run_optimize(args: PostArgs) -> Result<(), String> {
    let post = prepare(&args)?;
    let report = optimize_with_config(&post.text, &post.options, &post.config);
    if args.json {
        return print_json(&report);
    }
    print_analysis(&report.analysis, args.details);
    println!();
    print_variants(&report.variants);
    println!();
    print_strategy(&report.strategy);
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), String> {
    let (config, path) = EngineConfig::load(args.config)?;
    if let Some(target) = args.write {
        config.write(&target)?;
        println!("Wrote config to {}", target.display());
        return Ok(());
    }
    if let Some(path) = path.filter(|path| path.exists()) {
        println!("# loaded from {}", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn print_analysis(analysis: &AnalysisResult, details: bool) {
    let scores = &analysis.scores;
    let predictions = &analysis.predictions;

    println!("Overall score: {}/100", scores.overall);
    println!(
        "Scores: content quality {} | format {} | safety {}",
        scores.content_quality, scores.format, scores.safety
    );
    println!(
        "Predictions: reply {} | favorite {} | click {} | repost {} | follow {}",
        predictions.reply,
        predictions.favorite,
        predictions.click,
        predictions.repost,
        predictions.follow_author
    );
    println!(
        "Length: {} characters, {} words",
        analysis.char_count, analysis.word_count
    );

    if details && !analysis.factors.is_empty() {
        println!("\nFactors:");
        for factor in &analysis.factors {
            println!("  {} {}: {}", factor.impact, factor.signal, factor.reason);
        }
    }

    if !analysis.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &analysis.warnings {
            match warning.risk {
                Some(risk) => println!(
                    "- [{} / {}] {}",
                    warning.warning_type,
                    risk.label(),
                    warning.message
                ),
                None => println!("- [{}] {}", warning.warning_type, warning.message),
            }
        }
    }

    if !analysis.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &analysis.recommendations {
            println!(
                "- ({}) {}: {}",
                recommendation.priority.label(),
                recommendation.action,
                recommendation.benefit
            );
            println!("    e.g. {}", recommendation.example);
        }
    }
}

fn print_variants(variants: &[Variant]) {
    println!("Variants:");
    for variant in variants {
        println!("\n== {} ==", variant.variant_type);
        println!("{}", variant.content);
        println!("changes: {}", variant.changes.join(", "));
        println!("impact: {}", variant.expected_impact);
    }
}

fn print_strategy(strategy: &Strategy) {
    println!(
        "Format: {} ({})",
        strategy.format.choice.label(),
        strategy.format.rationale
    );
    if let Some(link) = &strategy.link {
        println!("Link: {} ({})", link.choice.label(), link.rationale);
    }
    println!("\nBest times to post:");
    for window in &strategy.timing {
        println!("- {} ({}): {}", window.window, window.hours, window.reason);
    }
    println!("\nFollow-up:");
    for action in &strategy.follow_up {
        println!("- {} [{}]: {}", action.action, action.timing, action.reason);
    }
}

fn print_pipeline() {
    println!("Ranking pipeline:");
    for (index, stage) in PIPELINE_STAGES.iter().enumerate() {
        println!(
            "{}. {} ({}): {}",
            index + 1,
            stage.name,
            stage.component,
            stage.description
        );
    }
    println!("\nEngagement actions:");
    for action in ENGAGEMENT_ACTIONS {
        let sign = match action.polarity {
            post_optimizer::knowledge::Polarity::Positive => "+",
            post_optimizer::knowledge::Polarity::Negative => "-",
        };
        println!("  {} {}: {}", sign, action.name, action.description);
    }
}

/// `--text -` or no `--text` reads the post from stdin. Only the trailing
/// line break a pipe adds is dropped; everything else counts toward length.
fn read_text(arg: Option<String>) -> Result<String, String> {
    match arg.as_deref() {
        Some("-") | None => {}
        Some(text) => return Ok(text.to_string()),
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err("missing post text: pass --text or pipe the post on stdin".to_string());
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed to read post from stdin: {}", err))?;
    post_from_stdin(&buffer)
}

fn post_from_stdin(buffer: &str) -> Result<String, String> {
    let text = buffer.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        return Err("post text from stdin is empty".to_string());
    }
    Ok(text.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_text_is_used_verbatim() {
        assert_eq!(read_text(Some("  gm fam  ".to_string())).unwrap(), "  gm fam  ");
    }

    #[test]
    fn piped_post_keeps_inner_layout() {
        let post = post_from_stdin("Big news!\n\nWe shipped it.\r\n").unwrap();
        assert_eq!(post, "Big news!\n\nWe shipped it.");
        assert!(post_from_stdin(" \n\n").is_err());
    }

    #[test]
    fn unknown_media_flag_is_rejected() {
        let cli = Cli::try_parse_from(["post-optimizer", "analyze", "--media", "gif"]);
        assert!(cli.is_err());

        let cli = Cli::try_parse_from(["post-optimizer", "analyze", "--media", "Video"]).unwrap();
        match cli.command {
            Command::Analyze(args) => assert_eq!(args.media, MediaType::Video),
            _ => panic!("expected analyze"),
        }
    }
}
