use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::{info, warn};

use dyntitle::app::action::Action;
use dyntitle::app::effect::Effect;
use dyntitle::app::effect_runner::EffectRunner;
use dyntitle::app::ports::{ConfigStore, ConfigStoreError, SharedDocument};
use dyntitle::app::reducer::reduce;
use dyntitle::app::render_schedule::next_animation_deadline;
use dyntitle::app::settings::{MissingTargetPolicy, RotatorSettings, SettingsOverrides};
use dyntitle::app::state::AppState;
use dyntitle::app::ticker::{TitleTicker, install};
use dyntitle::error;
use dyntitle::infra::adapters::TomlConfigStore;
use dyntitle::infra::host::TokioHost;
use dyntitle::infra::logging;
use dyntitle::ui::adapters::TuiAdapter;
use dyntitle::ui::event::handler::handle_event;
use dyntitle::ui::tui::TerminalSession;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file [default: ~/.config/dyntitle/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Title to rotate through; repeat to build the list
    #[arg(long = "title", value_name = "TEXT")]
    titles: Vec<String>,

    /// Id of the element that receives the titles
    #[arg(long, env = "DYNTITLE_TARGET")]
    target: Option<String>,

    /// Milliseconds between ticks
    #[arg(long, env = "DYNTITLE_INTERVAL_MS")]
    interval_ms: Option<u64>,

    /// What a tick does when the target element is not on the page
    #[arg(long, value_enum)]
    on_missing_target: Option<PolicyArg>,

    /// Log file [default: ~/.cache/dyntitle/dyntitle.log]
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Skip,
    Fail,
}

impl From<PolicyArg> for MissingTargetPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Skip => Self::Skip,
            PolicyArg::Fail => Self::Fail,
        }
    }
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            titles: (!self.titles.is_empty()).then(|| self.titles.clone()),
            target: self.target.clone(),
            interval_ms: self.interval_ms,
            on_missing_target: self.on_missing_target.map(Into::into),
        }
    }
}

fn load_settings(args: &Args) -> Result<RotatorSettings> {
    let store = match &args.config {
        Some(path) => TomlConfigStore::at_path(path.clone()),
        None => TomlConfigStore::new()?,
    };

    let loaded = match store.load() {
        Ok(Some(settings)) => settings,
        Ok(None) => RotatorSettings::default(),
        Err(ConfigStoreError::VersionMismatch { found, expected }) => {
            #[allow(clippy::print_stderr, reason = "fatal config error before the TUI starts")]
            {
                eprintln!(
                    "Error: Configuration file version mismatch (found v{}, expected v{}).\n\
                     Please update {} and try again.",
                    found,
                    expected,
                    store.storage_path().display()
                );
            }
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).wrap_err_with(|| {
                format!("failed to load {}", store.storage_path().display())
            });
        }
    };

    Ok(args.overrides().apply(loaded)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();

    if let Some(path) = args.log_file.clone().or_else(logging::default_log_path) {
        logging::init(&path, args.verbose)?;
    }

    let settings = load_settings(&args)?;
    if !settings.target_on_page() {
        warn!(target_id = %settings.target, "display target is not on the page");
    }

    let document: SharedDocument = Arc::new(Mutex::new(settings.build_document()?));
    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let host = Arc::new(TokioHost::new(Handle::current()));
    let ticker = TitleTicker::new(&settings, Arc::clone(&document)).report_to(action_tx.clone());
    install(host.as_ref(), ticker, settings.interval);

    let effect_runner = EffectRunner::new(Arc::clone(&host) as _);
    let mut state = AppState::new(env!("CARGO_PKG_NAME"), &settings, document);

    let mut tui = TerminalSession::start()?;

    let initial_size = tui.terminal().size()?;
    state.terminal_height = initial_size.height;

    loop {
        let deadline = next_animation_deadline(&state);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.render_dirty && !effects.contains(&Effect::Render) {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state)?;
                state.clear_dirty();
            }
            // Status message expiry
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                let effects = reduce(&mut state, Action::Render, now);
                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state)?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    host.shutdown();
    tui.finish()?;
    info!(ticks = state.page.ticks, "exiting");
    Ok(())
}
