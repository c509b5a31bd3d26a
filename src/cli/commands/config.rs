use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        if *print_config {
            let path = Config::config_file();
            match fs::read_to_string(&path) {
                Ok(content) => {
                    info(format!("Configuration file: {:?}", path));
                    println!("{}", content);
                }
                Err(_) => warning("No config file found, using defaults (run 'pawlogger init')"),
            }
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration OK");
            } else {
                for p in problems {
                    warning(p);
                }
            }
        }

        if !*print_config && !*check {
            info("Nothing to do: use --print or --check");
        }
    }
    Ok(())
}
