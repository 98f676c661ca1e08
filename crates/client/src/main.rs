//! `raildash` -- terminal dashboard for railway fault-inspection reports.
//!
//! Fetches reports from the backend at `API_BASE` and renders either the
//! list view (summary counters plus filtered rows) or one report's detail
//! view. See [`raildash_client::cli::USAGE`].

use std::io::IsTerminal;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raildash_client::api::TrainDataApi;
use raildash_client::cli::{parse_args, Command, USAGE};
use raildash_client::config::ClientConfig;
use raildash_client::loader::{fetch_detail_state, fetch_list_state, LoadError, ViewLoader};
use raildash_client::render::Renderer;
use raildash_core::view::ViewState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "raildash_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = ClientConfig::from_env();
    tracing::debug!(api_base = %config.api_base, "Loaded client configuration");

    let api = match TrainDataApi::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build API client");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let renderer = Renderer::new(std::io::stdout().is_terminal());

    match command {
        Command::Help => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::List { query } => {
            let view = ViewLoader::new();
            eprint!("{}", renderer.list(&view.state(), &query));
            match view.load_settled(fetch_list_state(api)).await {
                Ok(state) => {
                    print!("{}", renderer.list(&state, &query));
                    exit_code(&state)
                }
                Err(e) => load_failed(e),
            }
        }
        Command::Show { train_id } => {
            let view = ViewLoader::new();
            eprint!("{}", renderer.detail(&train_id, &view.state()));
            match view
                .load_settled(fetch_detail_state(api, train_id.clone()))
                .await
            {
                Ok(state) => {
                    print!("{}", renderer.detail(&train_id, &state));
                    exit_code(&state)
                }
                Err(e) => load_failed(e),
            }
        }
    }
}

fn exit_code<T>(state: &ViewState<T>) -> ExitCode {
    match state {
        ViewState::Ready(_) | ViewState::Empty => ExitCode::SUCCESS,
        ViewState::Loading | ViewState::Error(_) => ExitCode::FAILURE,
    }
}

fn load_failed(e: LoadError) -> ExitCode {
    tracing::error!(error = %e, "View failed to load");
    eprintln!("error: {e}");
    ExitCode::FAILURE
}
