use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use offerlens::distribution::{
    DEFAULT_BIN_SIZE, DEFAULT_MAX_BINNED_PRICE, brand_distribution, price_histogram,
    product_type_prices, ram_price, screen_size_distribution, top_models,
};
use offerlens::similarity::DEFAULT_K;
use offerlens::{
    AppConfig, ClusterConfig, DataSource, DeviceType, Feature, FeatureValues, OfferCache,
    OfferQuery, OfferSnapshot, PredictionClient, Segmentation, find_similar, generate_offers,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "offerlens", version, about = "Explore a laptop offer dataset")]
struct Cli {
    /// Offer dataset, a JSON file path or an http(s) URL
    #[arg(long, global = true)]
    data: Option<DataSource>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dataset overview and distributions
    Summary {
        /// Number of most frequent titles to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Offers closest to the given preferences
    Similar {
        #[command(flatten)]
        prefs: PreferenceArgs,
        #[arg(short, long, default_value_t = DEFAULT_K)]
        k: usize,
    },
    /// K-means segmentation of the dataset
    Segment {
        #[arg(short, long, default_value_t = ClusterConfig::DEFAULT_K)]
        k: usize,
        #[arg(long, default_value_t = ClusterConfig::DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,
        /// Seed for reproducible centroids
        #[arg(long)]
        seed: Option<u64>,
        /// Feature plotted on the x axis
        #[arg(short, long, default_value_t = Feature::Price)]
        x: Feature,
        /// Feature plotted on the y axis
        #[arg(short, long, default_value_t = Feature::Ram)]
        y: Feature,
        /// Print statistics and projected points as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a synthetic dataset
    Generate {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, short)]
        out: PathBuf,
    },
    /// Remote price prediction
    Predict {
        #[arg(long, default_value_t = DeviceType::Laptop)]
        device: DeviceType,
        #[command(flatten)]
        prefs: PreferenceArgs,
        /// Turbo clock in GHz
        #[arg(long)]
        clock_speed: Option<f64>,
        /// Also fetch this many similar products from the remote model
        #[arg(long)]
        similar: Option<usize>,
    },
}

#[derive(Args)]
struct PreferenceArgs {
    /// RAM in GB
    #[arg(long)]
    ram: Option<f64>,
    /// Storage in GB
    #[arg(long)]
    storage: Option<f64>,
    /// Screen size in inches
    #[arg(long)]
    screen_size: Option<f64>,
    #[arg(long)]
    cpu: Option<String>,
    #[arg(long)]
    gpu: Option<String>,
    #[arg(long)]
    os: Option<String>,
}

impl From<PreferenceArgs> for OfferQuery {
    fn from(prefs: PreferenceArgs) -> Self {
        OfferQuery {
            ram: prefs.ram,
            storage: prefs.storage,
            screen_size: prefs.screen_size,
            cpu: prefs.cpu,
            gpu: prefs.gpu,
            os: prefs.os,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(data) = cli.data {
        config.data_source = data;
    }

    match cli.command {
        Command::Summary { top } => summary(&config, top).await,
        Command::Similar { prefs, k } => similar(&config, prefs.into(), k).await,
        Command::Segment {
            k,
            max_iterations,
            seed,
            x,
            y,
            json,
        } => {
            let cluster_config = ClusterConfig {
                k,
                max_iterations,
                seed,
            };
            segment(&config, &cluster_config, x, y, json).await
        }
        Command::Generate { count, seed, out } => generate(count, seed, out),
        Command::Predict {
            device,
            prefs,
            clock_speed,
            similar,
        } => predict(&config, device, prefs.into(), clock_speed, similar).await,
    }
}

async fn load(config: &AppConfig) -> Result<Arc<OfferSnapshot>> {
    let cache = OfferCache::new(config.data_source.clone());
    cache
        .get()
        .await
        .with_context(|| format!("Failed to load offers from {}", config.data_source))
}

async fn summary(config: &AppConfig, top: usize) -> Result<()> {
    let snapshot = load(config).await?;
    let offers = &snapshot.offers;

    println!("=== Dataset ===");
    println!("Source:        {}", config.data_source);
    println!("Offers:        {}", offers.len());
    println!("Fingerprint:   {}", snapshot.fingerprint);
    println!("Loaded at:     {}", snapshot.loaded_at.to_rfc3339());

    println!("\n=== Brands ===");
    for entry in brand_distribution(offers) {
        println!("  {:<12} {}", entry.name, entry.count);
    }

    println!("\n=== Screen sizes ===");
    for entry in screen_size_distribution(offers) {
        println!("  {:>5}\"      {}", entry.screen_size, entry.count);
    }

    println!("\n=== Prices ===");
    for bin in price_histogram(offers, DEFAULT_BIN_SIZE, DEFAULT_MAX_BINNED_PRICE) {
        println!("  {:<12} {}", bin.label, bin.count);
    }

    println!("\n=== RAM vs. price ===");
    for row in ram_price(offers) {
        println!(
            "  {:>3} GB      avg ${:.2} ({} offers)",
            row.ram, row.average_price, row.count
        );
    }

    println!("\n=== Price by product type ===");
    for s in product_type_prices(offers) {
        println!(
            "  {:<12} min ${:.0}  q1 ${:.0}  median ${:.0}  q3 ${:.0}  max ${:.0}  avg ${:.2}",
            s.product_type, s.min, s.q1, s.median, s.q3, s.max, s.avg
        );
    }

    println!("\n=== Top {} models ===", top);
    for entry in top_models(offers, top) {
        println!("  {:>3}x {}", entry.count, entry.name);
    }

    Ok(())
}

async fn similar(config: &AppConfig, query: OfferQuery, k: usize) -> Result<()> {
    let snapshot = load(config).await?;

    if query.is_empty() {
        println!("No preferences given, nothing to compare against.");
        return Ok(());
    }

    let results = find_similar(&query, &snapshot.offers, k);
    println!("=== {} most similar offers ===", results.len());
    for r in results {
        println!(
            "  #{} [{:>3}%] {} (${:.0})",
            r.rank, r.similarity_score, r.offer.title, r.offer.price
        );
    }

    Ok(())
}

async fn segment(
    config: &AppConfig,
    cluster_config: &ClusterConfig,
    x: Feature,
    y: Feature,
    json: bool,
) -> Result<()> {
    let snapshot = load(config).await?;

    let start = Instant::now();
    let segmentation = Segmentation::run(&snapshot.offers, cluster_config);
    let stats = segmentation.stats();

    if json {
        let points = segmentation.project(x, y);
        let out = serde_json::json!({
            "x": x.name(),
            "y": y.name(),
            "iterations": segmentation.result.iterations,
            "converged": segmentation.result.converged,
            "clusters": stats,
            "points": points,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "✓ Clustered {} offers into {} groups in {} iterations{} [{:.3}s]\n",
        snapshot.len(),
        stats.len(),
        segmentation.result.iterations,
        if segmentation.result.converged {
            ""
        } else {
            " (iteration limit reached)"
        },
        start.elapsed().as_secs_f64()
    );

    for s in &stats {
        println!("Cluster {}: {} laptops", s.cluster + 1, s.count);
        println!("  Avg price:       ${:.2}", s.avg_price);
        println!("  Avg RAM:         {:.1} GB", s.avg_ram);
        println!("  Avg screen:      {:.1}\"", s.avg_screen_size);
        println!("  Common type:     {}", s.dominant_product_type);
    }

    println!(
        "\nProjection axes: x = {}, y = {} (use --json for points)",
        x.label(),
        y.label()
    );

    Ok(())
}

fn generate(count: usize, seed: Option<u64>, out: PathBuf) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let offers = generate_offers(count, &mut rng);
    let json = serde_json::to_vec_pretty(&offers).context("Failed to serialize offers")?;
    std::fs::write(&out, json).with_context(|| format!("Failed to write {}", out.display()))?;

    println!("✓ Wrote {} offers to {}", offers.len(), out.display());
    Ok(())
}

async fn predict(
    config: &AppConfig,
    device: DeviceType,
    query: OfferQuery,
    clock_speed: Option<f64>,
    similar: Option<usize>,
) -> Result<()> {
    let client = PredictionClient::with_timeout(
        config.prediction_url.clone(),
        config.similar_url.clone(),
        config.request_timeout,
    )
    .context("Failed to build HTTP client")?;

    let mut features = FeatureValues::from_query(&query);
    if let Some(ghz) = clock_speed {
        features.insert(FeatureValues::CLOCK_SPEED, ghz);
    }

    let prediction = client
        .predict_price(device, &features)
        .await
        .context("Price prediction failed")?;

    println!("Predicted price: ${:.2}", prediction.predicted_price);
    println!("\nFeature importance:");
    for (name, importance) in prediction.ranked_importances() {
        println!("  {:<40} {:.2}", name, importance);
    }

    if let Some(k) = similar {
        let products = client
            .find_similar_remote(device, &features, k)
            .await
            .context("Similar product lookup failed")?;

        println!("\n=== {} similar products ===", products.len());
        for p in products {
            println!(
                "  d={:.4}  {}{}",
                p.similarity_distance,
                p.title.as_deref().unwrap_or("Unknown Model"),
                p.mean_price
                    .map(|price| format!(" (${:.2})", price))
                    .unwrap_or_default()
            );
        }
    }

    Ok(())
}
