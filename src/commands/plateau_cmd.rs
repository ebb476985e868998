use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_plateau_report;
use crate::services::analysis::plateau_from_parameters_file;

pub fn plateau_command(cmd: Commands) {
    if let Commands::Plateau {
        config,
        output,
        unit_mcu,
        min_volume,
        max_volume,
        samples,
        threshold,
    } = cmd
    {
        let report = match plateau_from_parameters_file(
            &config, unit_mcu, min_volume, max_volume, samples, threshold,
        ) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to compute plateau: {e}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize plateau report: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write plateau report: {e}");
        } else {
            println!("{}", format_plateau_report(&report));
            println!("Plateau report written to {output}");
        }
    }
}
