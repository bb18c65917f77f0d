use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::web;

/// Handle the `serve` command: run the web interface until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { listen } = cmd {
        let cfg = cfg.clone().with_overrides(None, listen.as_deref());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(web::serve(&cfg))?;
    }
    Ok(())
}
