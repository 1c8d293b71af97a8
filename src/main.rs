use acme_support::{
    agent::{session::run_session, SupportAgent},
    cli::{output::Output, Cli},
    llm::{AnthropicClient, ModelParams},
    store::SupportStore,
    tools::ToolRegistry,
    utils::config::SupportConfig,
    Result,
};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    dotenvy::dotenv().ok();

    let mut config = SupportConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.model, cli.data_dir.as_deref());

    // Logs go to stderr so they never interleave with the chat on stdout
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter(cli.verbose))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let api_key = config.api_key()?;
    let store = SupportStore::from_files(&config.customers_path, &config.orders_path)?;
    let loaded = format!(
        "Loaded {} customers and {} orders",
        store.customers().len(),
        store.orders().len()
    );
    let tools = ToolRegistry::with_support_tools(store.into_shared());

    let params = ModelParams {
        max_tokens: Some(config.max_tokens),
        temperature: config.temperature,
    };
    let client = AnthropicClient::with_params(api_key, config.model.clone(), params)
        .with_base_url(config.api_base_url.clone());

    let mut agent = SupportAgent::new(Box::new(client), tools)
        .with_system_prompt(config.get_system_prompt())
        .with_max_history(config.max_history)
        .with_max_tool_iterations(config.max_tool_iterations);

    output.banner(agent.model_name());
    output.info(&loaded);
    output.hint("Ask about an account or an order. Type 'quit' to exit.");

    let stdin = io::stdin();
    run_session(&mut agent, stdin.lock(), io::stdout(), output).await
}
