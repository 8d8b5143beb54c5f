use clap::Parser;
use jabbrev::application::PreferencesService;
use jabbrev::cli::{format_external_lists, format_preferences, Cli, Commands, ListsCommand};
use jabbrev::error::AbbrevError;
use jabbrev::infrastructure::PlatformDirectories;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), AbbrevError> {
    let path = cli
        .config
        .unwrap_or_else(PlatformDirectories::config_file_path);
    let service = PreferencesService::new(path);

    match cli.command {
        Some(Commands::Init) => {
            let prefs = service.init()?;
            println!("Initialized preferences at {}", service.path().display());
            println!(
                "Journals directory: {}",
                prefs.journals_dir.as_deref().unwrap_or("")
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            if list {
                print!("{}", format_preferences(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: jabbrev config [--list | <key> [<value>]]");
                println!("Valid keys: journals-dir, use-fjournal-field, external-lists, created");
            }
            Ok(())
        }
        Some(Commands::Lists { action }) => {
            match action {
                Some(ListsCommand::Add { path }) => {
                    if service.add_list(&path)? {
                        println!("Added {}", path);
                    } else {
                        println!("Already registered: {}", path);
                    }
                }
                Some(ListsCommand::Remove { path }) => {
                    service.remove_list(&path)?;
                    println!("Removed {}", path);
                }
                None => {
                    let lists = service.lists()?;
                    let output = format_external_lists(&lists);
                    if lists.is_empty() {
                        println!("{}", output);
                    } else {
                        print!("{}", output);
                    }
                }
            }
            Ok(())
        }
        None => {
            println!("jabbrev - Journal abbreviation preferences");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
