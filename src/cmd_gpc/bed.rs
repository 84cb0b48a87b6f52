use clap::*;
use std::io::Write;

use gpc::libs::caller::{parse_genes, CallerFormat};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("bed")
        .about("Export predicted genes as positional annotations")
        .after_help(
            r###"
Writes one line per gene:

    contig<i>	<start0>	<end>	<tool>_gene<i>

where <i> is the gene's 0-based position in the input and <start0> converts
the canonical 1-based inclusive start to the 0-based half-open convention
(start - 1). Records whose header yields no coordinates are skipped.

Examples:
1. Glimmer headers (coordinates at token positions 2 and 3):
   gpc bed glimmer/genes.fna --format glimmer -o glimmer.bed

2. Prodigal headers (`# start # end #` fields):
   gpc bed prodigal/genes.fna --format prodigal -o prodigal.bed
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Gene caller output file to process"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .required(true)
                .num_args(1)
                .help("Header convention of the input: glimmer or prodigal"),
        )
        .arg(
            Arg::new("tool")
                .long("tool")
                .num_args(1)
                .help("Tool label for the name column. Defaults to the format name"),
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
    // Args
    //----------------------------
    let format = args.get_one::<String>("format").unwrap().parse::<CallerFormat>()?;
    let tool = args
        .get_one::<String>("tool")
        .cloned()
        .unwrap_or_else(|| format.name().to_string());

    //----------------------------
    // Process
    //----------------------------
    let reader = gpc::reader(args.get_one::<String>("infile").unwrap())?;
    let genes = parse_genes(reader, format)?;

    let mut writer = gpc::writer(args.get_one::<String>("outfile").unwrap())?;
    for (idx, gene) in genes.iter().enumerate() {
        writeln!(
            writer,
            "contig{}\t{}\t{}\t{}_gene{}",
            idx,
            gene.start - 1,
            gene.end,
            tool,
            idx
        )?;
    }

    Ok(())
}
