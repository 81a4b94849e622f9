use anyhow::{bail, Context, Result};
use rtally::{counter, theme, Count, FileStore, RootMarkers, StateCell, ThemeOption, TracingSink};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the default store location.
const STORE_ENV: &str = "RTALLY_STORE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Show,
    Increment,
    Reset,
    Theme(ThemeOption),
    ResetTheme,
}

#[derive(Debug)]
struct Config {
    store_path: Option<PathBuf>,
    action: Action,
    json: bool,
}

/// State printed after every command.
#[derive(Debug, Serialize)]
struct Snapshot {
    count: String,
    theme: ThemeOption,
    markers: Vec<&'static str>,
}

fn print_usage() {
    println!("Usage: tally-cli [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  show                 Print the stored state");
    println!("  increment            Add one to the counter");
    println!("  reset                Set the counter back to 0");
    println!("  theme <VALUE>        Select light, dark or system");
    println!("  reset-theme          Select system");
    println!();
    println!("Options:");
    println!("  --store <PATH>       Store file (default: ${} or the user config directory)", STORE_ENV);
    println!("  --json               Print the state as JSON");
    println!("  -h, --help           Print this help");
}

fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<Config> {
    let mut args = args.into_iter();
    let mut store_path = None;
    let mut json = false;
    let mut action = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--store" => {
                let path = args.next().context("--store requires a path")?;
                store_path = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            command if action.is_none() => {
                action = Some(match command {
                    "show" => Action::Show,
                    "increment" => Action::Increment,
                    "reset" => Action::Reset,
                    "reset-theme" => Action::ResetTheme,
                    "theme" => {
                        let value = args.next().context("theme requires a value")?;
                        Action::Theme(value.parse()?)
                    }
                    other => bail!("unknown command '{}'", other),
                });
            }
            other => bail!("unexpected argument '{}'", other),
        }
    }

    Ok(Config {
        store_path,
        action: action.unwrap_or(Action::Show),
        json,
    })
}

fn resolve_store_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Ok(path) = env::var(STORE_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir()
        .context("no configuration directory on this platform, pass --store")?;
    Ok(dir.join("rtally").join("storage.json"))
}

fn main() -> Result<()> {
    rtally::logging::init();

    let config = parse_args_from(env::args().skip(1))?;
    let mut store = FileStore::new(resolve_store_path(config.store_path)?);
    tracing::debug!(path = %store.path().display(), "using store");

    let sink = TracingSink;
    let mut count = StateCell::new(Count::default());
    let mut selected = StateCell::new(ThemeOption::default());
    let mut markers = RootMarkers::new();

    counter::initialize(&mut count, &store, &sink);
    theme::initialize(&mut selected, &store, &mut markers, &sink);

    match config.action {
        Action::Show => {}
        Action::Increment => counter::increment(&mut count, &mut store, &sink),
        Action::Reset => counter::reset(&mut count, &mut store, &sink),
        Action::Theme(option) => theme::change(&mut selected, &mut store, &mut markers, &sink, option),
        Action::ResetTheme => theme::reset(&mut selected, &mut store, &mut markers, &sink),
    }

    let snapshot = Snapshot {
        count: count.get().to_string(),
        theme: *selected.get(),
        markers: markers.iter().map(|m| m.as_str()).collect(),
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("count: {}", snapshot.count);
        println!("theme: {}", snapshot.theme);
        println!("markers: [{}]", snapshot.markers.join(", "));
    }

    Ok(())
}
