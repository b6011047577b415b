//! `jobdeck` - CLI for the job-posting record deck
//!
//! This binary wires the form and record store to their command-line
//! surface: `add` submits a record, `list` renders the saved deck,
//! `remove` drops one entry by index.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use jobdeck::cli::{AddCommand, Cli, Command, ConfigCommand, ListCommand, RemoveCommand};
use jobdeck::form::Field;
use jobdeck::{init_logging, Config, FormState, Record, RecordStore, Slot};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Add(add_cmd) => handle_add(&config, &add_cmd),
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Remove(remove_cmd) => handle_remove(&config, &remove_cmd),
        Command::Config(config_cmd) => handle_config(&config, &config_cmd),
    }
}

fn open_store(config: &Config) -> Result<RecordStore> {
    let slot = Slot::open(config.database_path())?;
    Ok(RecordStore::open(slot)?)
}

/// Submit the form: snapshot, append, reset.
fn submit(form: &mut FormState, store: &mut RecordStore) -> Result<usize> {
    let index = store.append(form.snapshot())?;
    form.reset();
    Ok(index)
}

fn handle_add(config: &Config, cmd: &AddCommand) -> Result<()> {
    let mut store = open_store(config)?;

    let mut form = FormState::new();
    if let Some(logo_url) = &cmd.logo_url {
        form.set_field(Field::LogoUrl, logo_url.as_str());
    }
    if let Some(company) = &cmd.company {
        form.set_field(Field::CompanyName, company.as_str());
    }
    if cmd.new {
        form.set_field(Field::IsNew, true);
    }
    if cmd.featured {
        form.set_field(Field::IsFeatured, true);
    }
    if let Some(position) = cmd.position {
        form.set_field(Field::Position, position.as_str());
    }
    if let Some(job_type) = cmd.job_type {
        form.set_field(Field::JobType, job_type.as_str());
    }
    if let Some(location) = &cmd.location {
        form.set_field(Field::Location, location.as_str());
    }
    for skill in &cmd.skill {
        form.toggle_skill(skill.as_str());
    }

    let index = submit(&mut form, &mut store)?;
    println!("Saved record #{index}");
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> Result<()> {
    let store = open_store(config)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(store.records())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No saved records.");
        return Ok(());
    }

    for (index, record) in store.records().iter().enumerate() {
        print_record(index, record);
    }
    Ok(())
}

fn print_record(index: usize, record: &Record) {
    println!("#{index} {}", record.company_name);
    if record.has_logo() {
        println!("  logo:      {}", record.logo_url);
    }
    println!("  new:       {}", yes_no(record.is_new));
    println!("  featured:  {}", yes_no(record.is_featured));
    println!("  position:  {}", record.position);
    println!("  job type:  {}", record.job_type);
    println!("  location:  {}", record.location);
    println!("  skills:    {}", record.skills.join(", "));
    println!();
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn handle_remove(config: &Config, cmd: &RemoveCommand) -> Result<()> {
    let mut store = open_store(config)?;

    if store.remove_at(cmd.index)? {
        println!("Removed record #{}", cmd.index);
    } else {
        println!("No record at index {} ({} saved)", cmd.index, store.len());
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path: {}", config.database_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
