//! UserHub CLI - command-line client for a UserHub user-directory server
//!
//! Lists, adds, updates, and removes users over the server's REST API.

use anyhow::Result;
use console::style;
use dialoguer::Confirm;
use userhub_cli::cli::{Cli, Commands};
use userhub_cli::client::users::{CreateAck, User, UserDraft, UsersClient};
use userhub_cli::config::Config;
use userhub_cli::error::CliError;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

/// Main application entry point
#[tokio::main]
async fn run() -> i32 {
    let cli = Cli::parse_args();

    match execute(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            err.downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code)
        }
    }
}

/// Execute the requested command
async fn execute(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    if verbose {
        println!("UserHub CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Verbose output enabled");
    }

    match cli.command {
        Commands::List => {
            let client = build_client(cli.api_url.as_deref(), verbose)?;
            handle_list(&client, verbose).await
        }
        Commands::Add { name, email, age } => {
            let client = build_client(cli.api_url.as_deref(), verbose)?;
            handle_add(&client, UserDraft { name, email, age }, verbose).await
        }
        Commands::Update {
            id,
            name,
            email,
            age,
        } => {
            let client = build_client(cli.api_url.as_deref(), verbose)?;
            handle_update(&client, id, UserDraft { name, email, age }, verbose).await
        }
        Commands::Remove { id, yes } => {
            let client = build_client(cli.api_url.as_deref(), verbose)?;
            handle_remove(&client, id, yes, verbose).await
        }
        Commands::Version => handle_version(),
    }
}

/// Build the users client from config file and command-line overrides
fn build_client(api_url_flag: Option<&str>, verbose: bool) -> Result<UsersClient> {
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(CliError::NoConfig) => Config::default(),
        Err(err) => return Err(err.into()),
    };

    if let Some(url) = api_url_flag {
        config.api_url = url.to_string();
    }
    config.validate()?;

    if verbose {
        println!("Server: {}", config.api_url);
    }

    Ok(UsersClient::from_config(&config)?)
}

/// Handle list command
async fn handle_list(client: &UsersClient, verbose: bool) -> Result<()> {
    if verbose {
        println!("Fetching users from {} ...", client.base_url());
    }

    let users: Vec<User> = client.list().await?;

    if users.is_empty() {
        println!("{} No users in the directory", style("⚠").yellow());
        return Ok(());
    }

    println!("{:>6}  {:<24}  {:<32}  {:>3}", "ID", "NAME", "EMAIL", "AGE");
    for user in &users {
        println!(
            "{:>6}  {:<24}  {:<32}  {:>3}",
            user.id, user.name, user.email, user.age
        );
    }

    println!();
    println!("{} {} user(s)", style("→").cyan(), users.len());
    Ok(())
}

/// Handle add command
async fn handle_add(client: &UsersClient, draft: UserDraft, verbose: bool) -> Result<()> {
    if verbose {
        println!("Creating user '{}' ...", draft.name);
    }

    let ack: CreateAck = client.create(&draft).await?;
    println!("{} {}", style("✓").green(), ack.message);
    Ok(())
}

/// Handle update command
async fn handle_update(
    client: &UsersClient,
    id: i64,
    draft: UserDraft,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Updating user {id} ...");
    }

    client.update(id, &draft).await?;
    println!("{} Updated user {id}", style("✓").green());
    Ok(())
}

/// Handle remove command
async fn handle_remove(client: &UsersClient, id: i64, yes: bool, verbose: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete user {id}?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{} Aborted", style("⚠").yellow());
            return Ok(());
        }
    }

    if verbose {
        println!("Removing user {id} ...");
    }

    client.remove(id).await?;
    println!("{} Removed user {id}", style("✓").green());
    Ok(())
}

/// Handle version command
fn handle_version() -> Result<()> {
    println!("userhub v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
