use pidash::adapters::ReqwestHttpClient;
use pidash::app::{App, AppMessage};
use pidash::cli::{self, CliCommand};
use pidash::poller::spawn_poller;
use pidash::server;
use pidash::startup::Config;
use pidash::terminal::{enter_tui_mode, install_panic_hook, leave_tui_mode};
use pidash::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let (command, config) = cli::parse_args(std::env::args(), Config::from_env());

    match command {
        CliCommand::Version => {
            println!("pidash {}", VERSION);
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", cli::args::usage());
            Ok(())
        }
        CliCommand::Serve => run_serve(&config),
        CliCommand::Monitor => run_monitor(&config),
    }
}

/// Run the stats endpoint server.
fn run_serve(config: &Config) -> Result<()> {
    color_eyre::install()?;
    init_logging(std::io::stderr);

    let addr = config
        .listen_addr
        .parse()
        .wrap_err_with(|| format!("invalid listen address {:?}", config.listen_addr))?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (handle, actual_addr) = server::start_server(addr).await?;
        println!("pidash stats endpoint on http://{}", actual_addr);

        // The server task runs until the process is terminated
        handle.await.wrap_err("stats server task failed")
    })
}

/// Run the TUI dashboard.
fn run_monitor(config: &Config) -> Result<()> {
    color_eyre::install()?;

    // The terminal belongs to the TUI; logs go to a file
    init_file_logging();

    // Setup panic hook to ensure terminal cleanup on panic
    install_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new();
    let client = Arc::new(ReqwestHttpClient::new());

    let result = runtime.block_on(async {
        // The poller handle is owned here and stopped on the way out; a
        // cycle in flight at that point is abandoned with the runtime.
        let poller = spawn_poller(client, config, app.message_tx.clone());
        let result = run_app(&mut terminal, &mut app).await;
        poller.stop();
        result
    });

    leave_tui_mode(&mut io::stdout());

    result
}

/// Main event loop: redraw when dirty, then wait on either a terminal
/// event or a poll result.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Keyboard / resize events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                    app.quit();
                                }
                                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                    app.quit();
                                }
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Poll results
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Log to the given writer, honoring `RUST_LOG` with an info default.
fn init_logging<W>(writer: W)
where
    W: for<'a> tracing_subscriber::fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pidash=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
}

/// Log to `<data dir>/pidash/pidash.log`; silently disabled when the data
/// dir is unavailable.
fn init_file_logging() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("pidash")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("pidash.log"))
    else {
        return;
    };
    init_logging(Arc::new(file));
}
