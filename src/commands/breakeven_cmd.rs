use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_breakeven_report;
use crate::services::analysis::breakeven_from_parameters_file;

pub fn breakeven_command(cmd: Commands) {
    if let Commands::Breakeven { config, output } = cmd {
        let report = match breakeven_from_parameters_file(&config) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to compute breakeven: {e}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize breakeven report: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write breakeven report: {e}");
        } else {
            println!("{}", format_breakeven_report(&report));
            println!("Breakeven report written to {output}");
        }
    }
}
