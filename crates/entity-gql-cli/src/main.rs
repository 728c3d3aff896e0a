mod cli;
mod commands;
mod logging;

use cli::{CheckParams, FragmentsParams, QueryParams, SelectParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(m.get_count("verbose"));
    tracing::debug!(command = name, "dispatching");

    match name {
        "query" => commands::query::run(QueryParams::from_matches(m).into()),
        "select" => commands::select::run(SelectParams::from_matches(m).into()),
        "fragments" => commands::fragments::run(FragmentsParams::from_matches(m).into()),
        "check" => commands::check::run(CheckParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    }
}
