mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::breakeven_cmd::breakeven_command;
use crate::commands::margin_cmd::margin_command;
use crate::commands::plateau_cmd::plateau_command;
use crate::commands::project_cmd::project_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Margin { .. } => margin_command(cmd),
        cmd @ Commands::Breakeven { .. } => breakeven_command(cmd),
        cmd @ Commands::Project { .. } => project_command(cmd),
        cmd @ Commands::Plateau { .. } => plateau_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
