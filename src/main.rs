use clap::Parser;
use concert_tickets::config::{Command, QuoteArgs};
use concert_tickets::utils::currency::format_gbp;
use concert_tickets::utils::logger;
use concert_tickets::{
    Catalog, CliConfig, DelayedQuoter, FixedClock, PricingConfig, PricingEngine, PricingResult,
    QuoteProvider, SystemClock, TicketDesk, TicketError,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let json_output = matches!(&config.command, Command::Quote(args) if args.json);
    if json_output {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting concert-tickets CLI");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config).await {
        Ok(PricingOutcome::Done) => Ok(()),
        Ok(PricingOutcome::Refused) => std::process::exit(1),
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

enum PricingOutcome {
    Done,
    Refused,
}

async fn run(config: &CliConfig) -> concert_tickets::Result<PricingOutcome> {
    let pricing_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading pricing configuration from: {}", path.display());
            PricingConfig::from_file(path)?
        }
        None => PricingConfig::default(),
    };

    let rules = pricing_config.pricing_rules()?;
    let desk = TicketDesk::new(Catalog::standard(), PricingEngine::new(rules));

    match &config.command {
        Command::Bands => {
            print_bands(&desk);
            Ok(PricingOutcome::Done)
        }
        Command::Quote(args) => {
            let latency = if args.no_delay {
                Duration::ZERO
            } else {
                pricing_config.simulated_latency()
            };
            quote(desk, args, latency).await
        }
    }
}

fn print_bands(desk: &TicketDesk) {
    for band in desk.catalog().bands() {
        println!("{:<20} {:>10}", band.name, format_gbp(band.unit_price));
    }
}

async fn quote(desk: TicketDesk, args: &QuoteArgs, latency: Duration) -> concert_tickets::Result<PricingOutcome> {
    let item = desk
        .catalog()
        .find_by_name(&args.band)
        .cloned()
        .ok_or_else(|| TicketError::UnknownBandError {
            name: args.band.clone(),
        })?;

    let provider: Box<dyn QuoteProvider> = match args.moment()? {
        Some(moment) => Box::new(DelayedQuoter::with_latency(desk, FixedClock(moment), latency)),
        None => Box::new(DelayedQuoter::with_latency(desk, SystemClock, latency)),
    };

    let result = provider.quote(&item, &args.tickets).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.display_text());
    }

    Ok(match result {
        PricingResult::Quoted(_) => PricingOutcome::Done,
        PricingResult::Invalid { .. } => PricingOutcome::Refused,
    })
}
