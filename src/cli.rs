use clap::{Parser, Subcommand};
use pubchemprops::config::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_MS};

#[derive(Parser, Debug)]
#[command(
    name = "pubchemprops",
    version,
    about = "Look up compound properties on PubChem"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "PUBCHEMPROPS_API_BASE",
        default_value = DEFAULT_API_BASE,
        help = "PubChem REST root; PUG REST and PUG View live under it"
    )]
    pub api_base: String,
    #[arg(
        long,
        global = true,
        env = "PUBCHEMPROPS_TIMEOUT_MS",
        default_value_t = DEFAULT_TIMEOUT_MS,
        help = "Per-request timeout in milliseconds"
    )]
    pub timeout_ms: u64,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a compound name to its PubChem CID
    Cid { name: String },
    /// Fetch first-layer properties from the PUG REST property table
    Props {
        name: String,
        #[arg(required = true, help = "Property names, e.g. MolecularWeight IUPACName")]
        properties: Vec<String>,
    },
    /// Fetch second-layer properties by heading from the compound record
    Describe {
        name: String,
        #[arg(help = "Headings, e.g. \"Boiling Point\"; defaults to the whole catalog")]
        headings: Vec<String>,
    },
    /// List known property names (offline)
    Catalog {
        #[arg(long, default_value_t = false, help = "List first-layer property names")]
        direct: bool,
    },
}
