use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "seolyzer")]
#[clap(about = "Automated SEO audit suite for theo-multimedia.com", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
