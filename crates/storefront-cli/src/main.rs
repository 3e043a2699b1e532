//! Storefront - terminal host for the Cilla Bites page model
//!
//! Reads one command per line from stdin and feeds the resulting page
//! events to the storefront, interleaved with testimonial auto-advance
//! ticks. Every event is handled to completion before the next one.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use storefront_core::{
    AutoAdvance, Decorations, PageEffect, PageEvent, Storefront, StorefrontConfig,
};
use storefront_types::Catalog;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod layout;
mod output;

use command::{Command, HELP};
use layout::PageLayout;
use output::{OutputMode, Printer};

/// Storefront CLI
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Cilla Bites storefront - cart, menu and checkout in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "STOREFRONT_CONFIG")]
    config: Option<String>,

    /// Catalog JSON file (menu and testimonials); built-in catalog if unset
    #[arg(long, env = "STOREFRONT_CATALOG")]
    catalog: Option<String>,

    /// Messaging destination phone number
    #[arg(long, env = "STOREFRONT_DESTINATION")]
    destination: Option<String>,

    /// Testimonial auto-advance period in milliseconds
    #[arg(long)]
    auto_advance_ms: Option<u64>,

    /// Disable testimonial auto-advance
    #[arg(long)]
    no_auto_advance: bool,

    /// Seed for the decorative effects
    #[arg(long)]
    seed: Option<u64>,

    /// Print effects as JSON lines
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, env = "STOREFRONT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "STOREFRONT_LOG_JSON")]
    log_json: bool,
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.to_string().into());

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config =
        StorefrontConfig::load(cli.config.as_deref()).context("loading configuration")?;

    // Override with CLI args
    if let Some(destination) = cli.destination {
        config.checkout.destination = destination;
    }
    if let Some(ms) = cli.auto_advance_ms {
        config.testimonials.auto_advance_ms = ms;
    }
    if cli.no_auto_advance {
        config.testimonials.auto_advance = false;
    }
    if cli.seed.is_some() {
        config.effects.seed = cli.seed;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.log_json;
    config.validate().context("validating configuration")?;

    init_tracing(&config.logging.level, config.logging.json);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path).with_context(|| format!("loading catalog {path}"))?,
        None => Catalog::default(),
    };

    let mut rng = match config.effects.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let decorations = Decorations::generate(&config.effects, &mut rng);

    let printer = Printer::new(if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    });

    let auto_advance = config.testimonials.auto_advance;
    let period = Duration::from_millis(config.testimonials.auto_advance_ms);

    let mut page = Storefront::new(catalog, config).context("building storefront")?;
    printer.effects(&page.init())?;
    printer.line("type help for commands")?;

    let (tick_tx, mut tick_rx) = mpsc::channel(16);
    let ticker = auto_advance.then(|| AutoAdvance::spawn(period, tick_tx));

    let layout = PageLayout::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Page(event)) => printer.effects(&page.handle(event))?,
                    Ok(Command::Scroll { offset_px }) => {
                        let mut effects = page.handle(PageEvent::Scroll { offset_px });
                        let elements =
                            layout.menu_boxes(&page.filter().visible_indices(), offset_px);
                        effects.extend(page.handle(PageEvent::Viewport {
                            height: layout.viewport_height,
                            elements,
                        }));
                        printer.effects(&effects)?;
                    }
                    Ok(Command::ShowMenu) => printer.menu(&page.menu_view())?,
                    Ok(Command::ShowCart) => printer.effects(&[
                        PageEffect::CartRendered(page.cart_view().clone()),
                    ])?,
                    Ok(Command::ShowTestimonial) => printer.effects(&[
                        PageEffect::TestimonialShown(page.testimonial_view()),
                    ])?,
                    Ok(Command::Effects) => printer.decorations(&decorations)?,
                    Ok(Command::Help) => printer.line(HELP)?,
                    Ok(Command::Quit) => break,
                    Err(e) => printer.line(&format!("? {e}"))?,
                }
            }
            Some(tick) = tick_rx.recv() => {
                tracing::debug!(seq = tick.seq, "Auto-advance tick");
                printer.effects(&page.handle(PageEvent::AutoAdvance))?;
            }
        }
    }

    if let Some(ticker) = ticker {
        ticker.stop();
    }
    tracing::info!(lines_in_cart = page.cart().len(), "Storefront closed");
    Ok(())
}
