use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use generation::{
    anki_file_name, save_anki_csv, ClientConfig, ExportFormat, GenerateRequest, GenerateResponse,
    GenerationClient, GenerationService, InputType,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "flashcards-cli")]
#[command(about = "Flashcard generator CLI - submit a video URL or text and export the cards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate flashcards from a video URL or text
    Generate(GenerateArgs),

    /// List the built-in prompt presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "text", "text_file"])))]
struct GenerateArgs {
    /// YouTube video URL
    #[arg(long)]
    url: Option<String>,

    /// Text content to turn into cards
    #[arg(long)]
    text: Option<String>,

    /// Read the text content from a file
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Export format (sheets, anki, both)
    #[arg(short, long, default_value = "sheets")]
    format: ExportFormat,

    /// Service root, overrides config and FLASHCARDS_API_BASE
    #[arg(long)]
    base_url: Option<String>,

    /// JSON client config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cards to print
    #[arg(long, default_value = "10")]
    limit: usize,

    /// Also write the cards to a local Anki CSV (default name from --title)
    #[arg(long, num_args = 0..=1)]
    save_anki: Option<Option<PathBuf>>,

    /// Title used for the default Anki CSV name
    #[arg(long)]
    title: Option<String>,

    /// Print the raw response as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => generate_command(args),
        Commands::Presets { json } => presets_command(json),
    }
}

fn client_config(args: &GenerateArgs) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::from_env(),
    };
    if let Some(base) = &args.base_url {
        config = config.with_base_url(base.clone());
    }
    Ok(config)
}

fn build_request(args: &GenerateArgs) -> Result<GenerateRequest> {
    let (input_type, content) = if let Some(url) = &args.url {
        (InputType::Url, url.clone())
    } else if let Some(text) = &args.text {
        (InputType::Text, text.clone())
    } else if let Some(path) = &args.text_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read text file {}", path.display()))?;
        (InputType::Text, text)
    } else {
        anyhow::bail!("one of --url, --text or --text-file is required");
    };
    Ok(GenerateRequest::new(input_type, content, args.format))
}

fn generate_command(args: GenerateArgs) -> Result<()> {
    let config = client_config(&args)?;
    let request = build_request(&args)?;
    debug!("Client config: {:?}", config);
    info!(
        "Generating flashcards from {} via {}",
        request.input_type.label(),
        config.base_url
    );

    let client = GenerationClient::new(config);
    let result = client.generate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&client, &result, args.limit);
    }

    if let Some(target) = args.save_anki {
        let path = target.unwrap_or_else(|| PathBuf::from(anki_file_name(args.title.as_deref())));
        save_anki_csv(&path, result.cards())?;
        println!("Anki import file: {}", path.display());
    }
    Ok(())
}

fn print_result(client: &GenerationClient, result: &GenerateResponse, limit: usize) {
    let cards = result.cards();
    if cards.is_empty() {
        println!("No flashcards returned.");
    }
    for card in cards.iter().take(limit) {
        println!("- {} — {}", card.question, card.answer);
    }
    if cards.len() > limit {
        println!("  ({} more)", cards.len() - limit);
    }
    if let Some(url) = &result.sheets_url {
        println!("Google Sheet: {url}");
    }
    if let Some(file) = &result.anki_file {
        if let Some(url) = client.export_url(file) {
            println!("Anki CSV: {url}");
        }
    }
}

fn presets_command(json: bool) -> Result<()> {
    let builtin = presets::builtin_presets();
    if json {
        println!("{}", serde_json::to_string_pretty(&builtin)?);
        return Ok(());
    }
    for (idx, preset) in builtin.iter().enumerate() {
        println!("{}. {}\n   {}", idx + 1, preset.name, preset.text);
    }
    Ok(())
}
