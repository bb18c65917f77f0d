use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        } else if !path.exists() {
            warning(format!(
                "No configuration file at {}; run `rinventory init` to create one",
                path.display()
            ));
        } else {
            println!("{}", path.display());
        }
    }
    Ok(())
}
