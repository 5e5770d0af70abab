use crate::cli::{Cli, Commands};
use crate::commands::catalog::handle_catalog;
use crate::commands::output::{emit, scalar_text};
use pubchemprops::{
    summarize_information, Fetch, PubChemClient, KNOWN_DESCRIPTIVE_PROPERTIES,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct CidReport {
    pub name: String,
    pub cid: u64,
}

pub fn handle_lookup_commands<F: Fetch>(
    cli: &Cli,
    client: &PubChemClient<F>,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Cid { name } => {
            let report = CidReport {
                name: name.clone(),
                cid: client.resolve_cid(name)?,
            };
            emit(cli.json, &report, |r| vec![format!("{}\t{}", r.name, r.cid)])?;
        }
        Commands::Props { name, properties } => {
            let record = client.get_direct_properties(name, properties)?;
            emit(cli.json, &record, |r| {
                r.iter()
                    .map(|(k, v)| format!("{}\t{}", k, scalar_text(v)))
                    .collect()
            })?;
        }
        Commands::Describe { name, headings } => {
            let map = if headings.is_empty() {
                client.get_descriptive_properties(name, &KNOWN_DESCRIPTIVE_PROPERTIES)?
            } else {
                client.get_descriptive_properties(name, headings)?
            };
            emit(cli.json, &map, |m| {
                m.iter()
                    .flat_map(|(heading, info)| {
                        summarize_information(info)
                            .into_iter()
                            .map(move |line| format!("{}\t{}", heading, line))
                    })
                    .collect()
            })?;
        }
        Commands::Catalog { direct } => handle_catalog(cli.json, *direct)?,
    }
    Ok(())
}
