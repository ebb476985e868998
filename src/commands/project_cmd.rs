use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_projection_report;
use crate::services::analysis::projection_from_parameters_file;

pub fn project_command(cmd: Commands) {
    if let Commands::Project {
        config,
        output,
        approval_rate,
        profit_per_approval,
        max_volume,
        samples,
    } = cmd
    {
        let report = match projection_from_parameters_file(
            &config,
            approval_rate,
            profit_per_approval,
            max_volume,
            samples,
        ) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to compute projection: {e}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize projection report: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write projection report: {e}");
        } else {
            println!("{}", format_projection_report(&report));
            println!("Projection report written to {output}");
        }
    }
}
