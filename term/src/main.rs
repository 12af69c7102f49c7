//! Terminal UI (TUI) app for browsing tour listings
//!
//! Fetches the list of tours from a JSON endpoint and shows each one as a
//! card. Cards can be expanded to read the full description or dismissed
//! with "Not Interested". Once every tour is dismissed the list can be
//! fetched again.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! tours-term --help
//!
//! # launch application
//! tours-term
//!
//! # fetch once and print the tours through the logger
//! tours-term --debug
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use config::{Config, ConfigManager};
use directories::ProjectDirs;
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{
    fs, io,
    rc::Rc,
    sync::mpsc::{Receiver, Sender, channel},
    thread::{self, JoinHandle},
};
use tours_lib::fetcher::{HttpTourFetcher, TourFetcher};

use crate::{
    ipc::{
        channel::{ChannelReceiver, ChannelSender},
        fetch::FetchIpc,
        message::{FetchMessage, RendererMessage},
        renderer::RendererIpc,
        traits::{IpcReceiver, IpcSender},
    },
    process::{fetch::FetchProcess, renderer::RendererProcess},
    store::{Store, effect::Effect, reducer::StoreReducer, state::State},
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod error;
#[doc(hidden)]
mod ipc;
#[doc(hidden)]
mod process;
#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;

#[cfg(test)]
mod test_utils;

const APP_NAME: &str = "tours-term";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run in debug mode - Fetches once and prints tours to the log
    /// foregoing UI
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// URL of the tours endpoint, overrides the config file
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Color theme (blue, emerald, indigo, red), overrides the config file
    #[arg(short, long)]
    theme: Option<String>,
}

#[doc(hidden)]
fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn get_project_config_path() -> Result<String> {
    let project_dir = get_project_dirs()?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn get_project_log_path() -> Result<String> {
    let project_dir = get_project_dirs()?;
    let data_dir = project_dir.data_dir();
    fs::create_dir_all(data_dir)?;
    let log_file_path = data_dir
        .join(format!("{APP_NAME}.log"))
        .to_str()
        .ok_or(eyre!("unable to construct log file path"))?
        .to_string();
    Ok(log_file_path)
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    if args.debug {
        simplelog::TermLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )?;
        return Ok(());
    }

    // the ui owns the terminal, logs go to a file instead
    let log_file = fs::File::create(get_project_log_path()?)?;

    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        log_file,
    )?;

    Ok(())
}

#[doc(hidden)]
fn load_config(args: &Args) -> Result<Config> {
    let config_manager = ConfigManager::builder()
        .path(get_project_config_path()?)
        .build()?;

    Ok(apply_overrides(config_manager.get(), args))
}

#[doc(hidden)]
fn apply_overrides(config: Config, args: &Args) -> Config {
    Config {
        endpoint: args.endpoint.clone().unwrap_or(config.endpoint),
        theme: args.theme.clone().unwrap_or(config.theme),
        ..config
    }
}

#[doc(hidden)]
fn print_config(config: &Config) {
    log::info!("configuration:");
    log::info!("endpoint:           {}", config.endpoint);
    log::info!("theme:              {}", config.theme());
    log::info!("request_timeout_ms: {:?}", config.request_timeout_ms);
}

#[doc(hidden)]
fn create_fetcher(config: &Config) -> Result<HttpTourFetcher> {
    let fetcher = HttpTourFetcher::builder()
        .endpoint(config.endpoint.clone())
        .timeout(config.request_timeout())
        .build()?;
    Ok(fetcher)
}

#[doc(hidden)]
fn start_fetch_thread(
    fetcher: Box<dyn TourFetcher>,
    renderer_tx: Sender<RendererMessage>,
    fetch_rx: Receiver<FetchMessage>,
) -> Result<JoinHandle<Result<()>>> {
    let process = FetchProcess::builder()
        .fetcher(fetcher)
        .ipc(FetchIpc::new(
            Box::new(ChannelSender::new(renderer_tx)),
            Box::new(ChannelReceiver::new(fetch_rx)),
        ))
        .build()?;

    Ok(thread::spawn(move || process.serve()))
}

#[doc(hidden)]
fn create_store(
    config: &Config,
    fetch_tx: Box<dyn IpcSender<FetchMessage>>,
) -> Store {
    let true_color_enabled =
        match supports_color::on(supports_color::Stream::Stdout) {
            Some(support) => support.has_16m,
            _ => false,
        };

    let mut store = Store::new(
        State::new(config.theme(), true_color_enabled),
        StoreReducer::boxed(),
    );

    store.set_effect_fn(move |effect| match effect {
        Effect::FetchTours(id) => fetch_tx.send(FetchMessage::Load(id)),
        Effect::None => Ok(()),
    });

    store
}

#[doc(hidden)]
fn run_headless(fetcher: Box<dyn TourFetcher>) -> Result<()> {
    let (renderer_tx, renderer_rx) = channel();
    let (fetch_tx, fetch_rx) = channel();

    let handle = start_fetch_thread(fetcher, renderer_tx, fetch_rx)?;

    let tx = ChannelSender::new(fetch_tx);
    tx.send(FetchMessage::Load(1))?;
    tx.send(FetchMessage::Quit)?;

    let rx = ChannelReceiver::new(renderer_rx);

    match rx.recv()? {
        RendererMessage::ToursSettled(_, Ok(tours)) => {
            log::info!("fetched {} tours", tours.len());
            for tour in tours {
                log::info!("{} | {} | ${}", tour.id, tour.name, tour.price);
            }
        }
        RendererMessage::ToursSettled(_, Err(err)) => {
            log::error!("failed to fetch tours: {err}");
        }
    }

    handle.join().map_err(error::report_from_thread_panic)?
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let config = load_config(&args)?;

    print_config(&config);

    let fetcher: Box<dyn TourFetcher> = Box::new(create_fetcher(&config)?);

    if args.debug {
        return run_headless(fetcher);
    }

    let (renderer_tx, renderer_rx) = channel();
    let (fetch_tx, fetch_rx) = channel();

    let fetch_tx = ChannelSender::new(fetch_tx);

    let store = Rc::new(create_store(&config, fetch_tx.box_clone()));

    // ignore handle here - an in-flight request is not waited on at exit
    start_fetch_thread(fetcher, renderer_tx, fetch_rx)?;

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let renderer_ipc = RendererIpc::new(
        Box::new(fetch_tx),
        Box::new(ChannelReceiver::new(renderer_rx)),
    );

    RendererProcess::new(terminal, renderer_ipc, store).start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
