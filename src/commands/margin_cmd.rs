use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_margin_report;
use crate::services::analysis::margin_from_parameters_file;

pub fn margin_command(cmd: Commands) {
    if let Commands::Margin {
        config,
        output,
        queries,
    } = cmd
    {
        let report = match margin_from_parameters_file(&config, queries) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to compute margin: {e}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize margin report: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write margin report: {e}");
        } else {
            println!("{}", format_margin_report(&report));
            println!("Margin report written to {output}");
        }
    }
}
