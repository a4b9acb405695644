use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full audit checklist against the target site
    Audit {
        /// Audit an arbitrary base URL instead of the configured targets
        #[clap(short, long)]
        url: Option<String>,
        /// Audit the local development server
        #[clap(short, long)]
        local: bool,
    },
}
