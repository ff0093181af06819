use clap::Parser;
use coursehive::app::{session, view};
use coursehive::domain::ports::ConfigProvider;
use coursehive::utils::logger;
use coursehive::{CatalogState, CliConfig, CourseLoader, HttpCourseSource};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting coursehive");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let source = match HttpCourseSource::from_config(&config) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };
    let loader = CourseLoader::new(source);
    let mut state = CatalogState::new(config.page_size());
    state.set_search(cli.search.clone());
    state.set_category(cli.category.clone());

    if cli.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session::run_session(
            &loader,
            &mut state,
            config.detail_route_prefix(),
            stdin,
            tokio::io::stdout(),
        )
        .await?;
        return Ok(());
    }

    loader.load(&mut state).await;
    state.go_to_page(cli.page);

    let rendered = if cli.categories {
        view::render_categories(&state.category_options())
    } else if cli.json {
        let document = view::PageDocument::from_state(&state, config.detail_route_prefix());
        format!("{}\n", serde_json::to_string_pretty(&document)?)
    } else {
        view::render_page(&state, config.detail_route_prefix())
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    if let Some(message) = state.status().failure() {
        tracing::error!("❌ Course listing failed: {}", message);
        std::process::exit(2);
    }

    Ok(())
}
