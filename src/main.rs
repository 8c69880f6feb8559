use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordgrid::{
    config::{Config, OutputFormat},
    render,
    words::WordList,
    GridBuilder,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded: {:?}", config);

    // First argument overrides WORDS_PATH
    let words_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.words.path.clone());

    let words = WordList::load(&words_path, config.words.format)
        .await?
        .fit_to(
            config.puzzle.size,
            config.words.min_length,
            config.words.max_words,
        );

    if words.is_empty() {
        tracing::warn!("No usable words in {}; grid will be filler only", words_path);
    }

    let builder = GridBuilder::new(config.puzzle.size).with_max_attempts(config.puzzle.max_attempts);
    if builder.max_attempts().is_none() {
        tracing::warn!("MAX_ATTEMPTS=0: placement retries are unbounded and may never finish");
    }

    let puzzle = match config.puzzle.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            builder.build_with(words.words().as_slice(), &mut StdRng::seed_from_u64(seed))?
        }
        None => builder.build(words.words().as_slice())?,
    };

    match config.output.format {
        OutputFormat::Text => {
            print!("{}", render::puzzle_text(&puzzle, &words));
            if config.output.show_answers {
                println!("\nAnswer key:");
                print!("{}", render::answer_key(&puzzle));
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                render::puzzle_json(&puzzle, &words, config.output.show_answers)?
            );
        }
    }

    Ok(())
}
