use clap::ValueEnum;

pub mod commands;
pub mod logging;
pub mod render;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Table,
    Json,
    Csv,
}
