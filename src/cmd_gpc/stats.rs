use clap::*;
use std::io::Write;

use anyhow::bail;
use gpc::libs::caller::parse_sequences;
use gpc::libs::stats::SeqStats;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("stats")
        .about("Descriptive statistics of predicted genes, one column per tool")
        .after_help(
            r###"
Parses each input as marker-delimited caller output (`>` starts a record) and
reports gene count, length distribution and GC content per tool, as a
markdown table with one column per input. Values are rounded to one decimal
at print time only.

Column headers default to the input file stems; override with --name, once
per input.

Examples:
1. Compare two callers:
   gpc stats glimmer/genes.fna prodigal/genes.fna

2. Name the columns:
   gpc stats g.fna p.fna --name Glimmer --name Prodigal
"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Gene caller output file(s) to process"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .action(ArgAction::Append)
                .help("Column header for each input, in order"),
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
    let infiles: Vec<String> = args
        .get_many::<String>("infiles")
        .unwrap()
        .cloned()
        .collect();
    let names: Vec<String> = match args.get_many::<String>("name") {
        Some(values) => {
            let names: Vec<String> = values.cloned().collect();
            if names.len() != infiles.len() {
                bail!(
                    "got {} --name values for {} input(s)",
                    names.len(),
                    infiles.len()
                );
            }
            names
        }
        None => infiles.iter().map(|f| stem(f)).collect(),
    };

    //----------------------------
    // Process
    //----------------------------
    let mut cols = vec![];
    for infile in &infiles {
        let reader = gpc::reader(infile)?;
        let seqs = parse_sequences(reader)?;
        cols.push(SeqStats::from_seqs(&seqs));
    }

    //----------------------------
    // Output
    //----------------------------
    let mut writer = gpc::writer(args.get_one::<String>("outfile").unwrap())?;
    write_table(&mut writer, &names, &cols)?;

    Ok(())
}

fn stem(path: &str) -> String {
    std::path::Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

const METRICS: [&str; 6] = [
    "Gene Count",
    "Avg. Gene Length",
    "Min Gene Length",
    "Max Gene Length",
    "Total Nucleotides",
    "GC Content (%)",
];

fn rows(stats: &SeqStats) -> [f64; 6] {
    [
        stats.count as f64,
        stats.avg_len,
        stats.min_len as f64,
        stats.max_len as f64,
        stats.total_nt as f64,
        stats.gc_content,
    ]
}

// Markdown pipe table, metric rows x tool columns, numbers right-aligned
fn write_table(
    writer: &mut Box<dyn Write>,
    names: &[String],
    cols: &[SeqStats],
) -> anyhow::Result<()> {
    let cells: Vec<[f64; 6]> = cols.iter().map(rows).collect();

    let metric_w = METRICS.iter().map(|m| m.len()).max().unwrap();
    let widths: Vec<usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            (0..METRICS.len())
                .map(|r| format!("{:.1}", cells[i][r]).len())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap()
        })
        .collect();

    write!(writer, "| {:metric_w$} |", "")?;
    for (name, &w) in names.iter().zip(&widths) {
        write!(writer, " {:>w$} |", name)?;
    }
    writeln!(writer)?;

    write!(writer, "|:{:-<metric_w$}-|", "")?;
    for &w in &widths {
        write!(writer, "{:-<w$}-:|", "")?;
    }
    writeln!(writer)?;

    for (r, metric) in METRICS.iter().enumerate() {
        write!(writer, "| {:metric_w$} |", metric)?;
        for (c, &w) in widths.iter().enumerate() {
            write!(writer, " {:>w$.1} |", cells[c][r])?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
