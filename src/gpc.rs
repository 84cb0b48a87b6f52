extern crate clap;
use clap::*;

mod cmd_gpc;

fn main() -> anyhow::Result<()> {
    let app = Command::new("gpc")
        .version(crate_version!())
        .about("`gpc` - Gene Prediction Comparator")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_gpc::stats::make_subcommand())
        .subcommand(cmd_gpc::bed::make_subcommand())
        .subcommand(cmd_gpc::json::make_subcommand())
        .subcommand(cmd_gpc::overlap::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Per-tool reports:
    * stats - Descriptive statistics of predicted genes
* Exports:
    * bed  - Positional annotations, 0-based half-open
    * json - Combined gene records for downstream tooling
* Cross-tool comparison:
    * overlap - Intersected bases and containment percentage

"###,
        );

    // Check which subcommand the user ran...
    match app.get_matches().subcommand() {
        Some(("stats", sub_matches)) => cmd_gpc::stats::execute(sub_matches),
        Some(("bed", sub_matches)) => cmd_gpc::bed::execute(sub_matches),
        Some(("json", sub_matches)) => cmd_gpc::json::execute(sub_matches),
        Some(("overlap", sub_matches)) => cmd_gpc::overlap::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
