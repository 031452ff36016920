use anyhow::Result;
use eventai::{Catalog, EventAiConfig, EventEngine, RecommendationRequest};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = EventAiConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let catalog = Catalog::load_or_bundled(&config.catalog.data_file);
    let engine = EventEngine::with_limits(catalog, config.search.limits());

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        println!("eventai {} - event planning recommendations", eventai::VERSION);
        println!("usage: eventai <natural language query>");
        println!("example: eventai wedding venue in delhi for 200 people");
        println!("cities: {}", engine.city_names().join(", "));
        return Ok(());
    }

    let recommendations = engine.get_recommendations(&RecommendationRequest {
        query,
        ..RecommendationRequest::default()
    });
    println!("{}", serde_json::to_string_pretty(&recommendations)?);

    Ok(())
}
