use clap::*;
use std::io::Write;

use serde::Serialize;

use gpc::libs::caller::{parse_genes, CallerFormat};
use gpc::libs::gene::Gene;

#[derive(Serialize)]
struct Combined {
    glimmer: Vec<Gene>,
    prodigal: Vec<Gene>,
}

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("json")
        .about("Export combined gene records for downstream tooling")
        .after_help(
            r###"
Parses a Glimmer output and a Prodigal output and writes one pretty-printed
JSON document:

    {
      "glimmer": [ { "start": ..., "end": ..., "sequence": "..." }, ... ],
      "prodigal": [ ... ]
    }

Coordinates are canonical, 1-based inclusive with start <= end.

Examples:
1. gpc json glimmer/genes.fna prodigal/genes.fna -o genes.json
"###,
        )
        .arg(
            Arg::new("glimmer")
                .required(true)
                .index(1)
                .help("Glimmer-style output file"),
        )
        .arg(
            Arg::new("prodigal")
                .required(true)
                .index(2)
                .help("Prodigal-style output file"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Process
    //----------------------------
    let glimmer = parse_genes(
        gpc::reader(args.get_one::<String>("glimmer").unwrap())?,
        CallerFormat::Glimmer,
    )?;
    let prodigal = parse_genes(
        gpc::reader(args.get_one::<String>("prodigal").unwrap())?,
        CallerFormat::Prodigal,
    )?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = gpc::writer(args.get_one::<String>("outfile").unwrap())?;
    serde_json::to_writer_pretty(&mut writer, &Combined { glimmer, prodigal })?;
    writeln!(writer)?;

    Ok(())
}
