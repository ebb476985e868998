pub mod base_commands;
pub mod breakeven_cmd;
pub mod margin_cmd;
pub mod plateau_cmd;
pub mod project_cmd;
pub mod report_format;
