use clap::{arg, command, Command};
use color_eyre::eyre::Result;

use storefront_theme::logger::setup_logger;
use storefront_theme::{SettingsStore, ThemeStore};

/// Small front end over the theme store: enumerate themes, inspect the
/// active one, switch, and dump the style surface. All theme logic lives in
/// the library.
fn main() -> Result<()> {
    setup_logger();

    let matches = command!()
        .about("Inspect and switch the storefront theme")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List the known themes"))
        .subcommand(Command::new("current").about("Show the active theme"))
        .subcommand(
            Command::new("set")
                .about("Switch the active theme")
                .arg(arg!(<ID> "Theme identifier, e.g. theme2")),
        )
        .subcommand(Command::new("vars").about("Print the global style variables"))
        .get_matches();

    let mut store = ThemeStore::new(SettingsStore::at_default_location()?);

    match matches.subcommand() {
        Some(("list", _)) => {
            for theme in store.themes() {
                let marker = if theme.id == store.active_id() { "*" } else { " " };
                println!("{marker} {}  {}", theme.id, theme.name);
            }
        }
        Some(("current", _)) => {
            let theme = store.active_theme();
            println!("{}  {} ({} layout)", theme.id, theme.name, theme.layout);
        }
        Some(("set", sub_matches)) => {
            let raw = sub_matches.get_one::<String>("ID").expect("ID is required");
            store.change_theme(raw);
            println!("Active theme: {}", store.active_id());
        }
        Some(("vars", _)) => {
            let vars = store.style_vars();
            for name in vars.names() {
                if let Some(value) = vars.get(name) {
                    println!("{name}: {value}");
                }
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
