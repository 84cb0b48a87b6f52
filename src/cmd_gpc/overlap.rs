use clap::*;
use std::io::Write;

use gpc::libs::caller::{parse_genes, CallerFormat};
use gpc::libs::overlap::pairwise;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("overlap")
        .about("Intersected bases between two callers' predicted regions")
        .after_help(
            r###"
Sums the overlapping bases over every (reference gene, query gene) pair and
reports what share of the query's bases that covers:

    #intersect	query_bases	pct
    280	3721	7.5

The sum is per-pair: several reference genes overlapping one query gene all
count, without deduplication. Containment is asymmetric; the second input is
always the denominator. Swap the inputs for the other direction.

Spans touching at a boundary (a.end == b.start) do not overlap.

Examples:
1. How much of Prodigal's bases does Glimmer cover:
   gpc overlap glimmer/genes.fna prodigal/genes.fna \
       --format glimmer --query-format prodigal
"###,
        )
        .arg(
            Arg::new("reference")
                .required(true)
                .index(1)
                .help("Reference caller output file"),
        )
        .arg(
            Arg::new("query")
                .required(true)
                .index(2)
                .help("Query caller output file, the containment denominator"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .required(true)
                .num_args(1)
                .help("Header convention of the reference: glimmer or prodigal"),
        )
        .arg(
            Arg::new("query_format")
                .long("query-format")
                .required(true)
                .num_args(1)
                .help("Header convention of the query: glimmer or prodigal"),
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
    let ref_format = args
        .get_one::<String>("format")
        .unwrap()
        .parse::<CallerFormat>()?;
    let query_format = args
        .get_one::<String>("query_format")
        .unwrap()
        .parse::<CallerFormat>()?;

    //----------------------------
    // Process
    //----------------------------
    let reference = parse_genes(
        gpc::reader(args.get_one::<String>("reference").unwrap())?,
        ref_format,
    )?;
    let query = parse_genes(
        gpc::reader(args.get_one::<String>("query").unwrap())?,
        query_format,
    )?;

    let result = pairwise(&reference, &query);

    //----------------------------
    // Output
    //----------------------------
    let mut writer = gpc::writer(args.get_one::<String>("outfile").unwrap())?;
    writeln!(writer, "#intersect\tquery_bases\tpct")?;
    writeln!(
        writer,
        "{}\t{}\t{:.1}",
        result.intersected_bases,
        result.query_bases,
        result.containment_pct()
    )?;

    Ok(())
}
