use clap::Parser;
use ebitda_dash::app::{export, report};
use ebitda_dash::config::cli::{Command, LookupArgs, SeriesArgs};
use ebitda_dash::utils::error::ErrorSeverity;
use ebitda_dash::utils::{logger, validation::Validate};
use ebitda_dash::{fetch_recent_series, to_chart_points, ApiClient, CliConfig, ClientConfig, EbitdaError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::info!("Using EBITDA service at {}", config.base_url);

    let client = match ApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };

    let outcome = match &cli.command {
        Command::Lookup(args) => lookup(&client, args).await,
        Command::Series(args) => series(&client, &config, args).await,
        Command::Health => health(&client).await,
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }
    Ok(())
}

async fn lookup(client: &ApiClient, args: &LookupArgs) -> ebitda_dash::Result<()> {
    let query = args.to_query();
    query.validate()?;

    let response = client.fetch(&query).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print!("{}", report::render_table(&response));
    let warnings = report::render_warnings(&response.warnings);
    if !warnings.is_empty() {
        println!();
        print!("{}", warnings);
    }
    Ok(())
}

async fn series(client: &ApiClient, config: &ClientConfig, args: &SeriesArgs) -> ebitda_dash::Result<()> {
    let responses = fetch_recent_series(
        client,
        &args.query.company,
        config.series_years,
        args.query.report_code,
        args.query.fs_div,
    )
    .await;
    let points = to_chart_points(&responses);

    if points.is_empty() {
        println!("시계열 데이터가 없습니다.");
        return Ok(());
    }

    print!("{}", report::render_series(&points));
    if let Some(path) = &args.csv {
        export::save_series_csv(path, &points)?;
        tracing::info!("Series saved to {}", path.display());
    }
    Ok(())
}

async fn health(client: &ApiClient) -> ebitda_dash::Result<()> {
    if client.health_check().await {
        println!("ok");
        Ok(())
    } else {
        Err(EbitdaError::Unhealthy)
    }
}

fn exit_with(e: &EbitdaError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
    eprint!("{}", report::render_error(e));
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
