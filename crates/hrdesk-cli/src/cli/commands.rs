//! Context setup and dispatch.
//!
//! `run()` parses the arguments, installs logging, resolves the data
//! directory and config, then hands each subcommand to `HrDeskApi`. Handlers
//! only translate arguments and render the returned `CmdResult`.

use super::print::{print_messages, print_result};
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use hrdesk::api::{CmdMessage, HrDeskApi};
use hrdesk::config::{default_data_dir, HrDeskConfig};
use hrdesk::error::HrDeskError;
use hrdesk::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Api = HrDeskApi<FsBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let mut config = HrDeskConfig::load(&data_dir)
        .with_context(|| format!("loading config from {}", data_dir.display()))?;
    config.data_dir = Some(data_dir.clone());
    debug!(data_dir = %data_dir.display(), "opening store");

    let mut api = HrDeskApi::open(config).context("opening store")?;

    match cli.command {
        Some(Commands::Get { key }) => handle_get(&api, &key),
        Some(Commands::Set { key, json }) => handle_set(&mut api, &key, &json),
        Some(Commands::Keys) | None => handle_keys(&api),
        Some(Commands::Remove { key }) => handle_remove(&mut api, &key),
        Some(Commands::NextId { collection }) => {
            println!("{}", api.next_id(&collection)?);
            Ok(())
        }
        Some(Commands::NextCode) => handle_next_code(&api),
        Some(Commands::Export { key, out }) => handle_export(&api, &key, out),
        Some(Commands::Import { key, file }) => handle_import(&mut api, &key, file),
        Some(Commands::Login { username, role }) => handle_login(&mut api, &username, &role),
        Some(Commands::Logout) => {
            print_result(&api.logout()?);
            Ok(())
        }
        Some(Commands::Whoami) => handle_whoami(&api),
        Some(Commands::Init) => {
            print_result(&api.init()?);
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            print_result(&api.clear(yes)?);
            Ok(())
        }
    }
}

/// Logs go to stderr so command output stays pipeable.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_get(api: &Api, key: &str) -> Result<()> {
    match api.get(key) {
        Ok(result) => {
            print_result(&result);
            Ok(())
        }
        Err(HrDeskError::NotFound(_)) => {
            print_messages(&[CmdMessage::info(format!("Nothing stored under '{}'.", key))]);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_set(api: &mut Api, key: &str, json: &str) -> Result<()> {
    let result = api
        .set(key, json)
        .with_context(|| format!("storing '{}'", key))?;
    print_result(&result);
    Ok(())
}

fn handle_keys(api: &Api) -> Result<()> {
    let result = api.keys()?;
    if result.keys.is_empty() {
        print_messages(&[CmdMessage::info("No data stored.")]);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn handle_remove(api: &mut Api, key: &str) -> Result<()> {
    print_result(&api.remove(key)?);
    Ok(())
}

fn handle_next_code(api: &Api) -> Result<()> {
    let code = api.next_employee_code()?;
    println!("{}", code);
    Ok(())
}

fn handle_export(api: &Api, key: &str, out: Option<PathBuf>) -> Result<()> {
    let result = api
        .export(key, out.as_deref())
        .with_context(|| format!("exporting '{}'", key))?;
    print_result(&result);
    Ok(())
}

fn handle_import(api: &mut Api, key: &str, file: PathBuf) -> Result<()> {
    let result = api
        .import(key, &file, || debug!("import complete, reloading view"))
        .with_context(|| format!("importing {}", file.display()))?;
    print_result(&result);
    Ok(())
}

fn handle_login(api: &mut Api, username: &str, role: &str) -> Result<()> {
    print_result(&api.login(username, role)?);
    Ok(())
}

fn handle_whoami(api: &Api) -> Result<()> {
    match api.current_user() {
        Ok(user) => println!("{}", user.display_name()),
        Err(HrDeskError::NotAuthenticated) => {
            print_messages(&[CmdMessage::info("Not logged in.")]);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
