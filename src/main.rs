use anyhow::Result;
use clap::{CommandFactory, Parser};

use aws_configure::{
    cli::{Cli, Commands},
    commands,
    paths::Paths,
    store::ProfileStore,
    telemetry,
    ui::Ui,
};

fn run(cli: Cli, ui: &Ui) -> Result<()> {
    telemetry::init_tracing(cli.verbose)?;

    let paths = Paths::resolve(cli.config_file, cli.credentials_file)?;
    tracing::debug!(
        config = %paths.config_file.display(),
        credentials = %paths.credentials_file.display(),
        "resolved profile files"
    );
    let store = ProfileStore::new(paths);

    match cli.command {
        Commands::List => commands::list(&store, ui),
        Commands::Set(args) => commands::set(&store, &args, ui),
        Commands::Get(args) => commands::get(&store, &args, ui),
        Commands::Delete(args) => commands::delete(&store, &args, ui),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "aws-configure", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let ui = Ui::new(cli.color, cli.no_color);

    if let Err(err) = run(cli, &ui) {
        ui.err(format!("{err:#}"));
        std::process::exit(1);
    }
}
