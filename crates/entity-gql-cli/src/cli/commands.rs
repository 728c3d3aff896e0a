//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Add selector input args.
fn with_selector_args(cmd: Command) -> Command {
    cmd.arg(selector_path_arg()).arg(selector_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("entity-gql")
        .about("GraphQL queries from entity-relationship selectors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(query_command())
        .subcommand(select_command())
        .subcommand(fragments_command())
        .subcommand(check_command())
}

/// Render a named operation around a selector.
pub fn query_command() -> Command {
    let cmd = Command::new("query")
        .about("Render a named query operation from a selector")
        .override_usage(
            "\
  entity-gql query <SELECTOR> -n <NAME> [--params <JSON>]
  entity-gql query -s <JSON> -n <NAME> [--raw-params <TEXT>]",
        )
        .after_help(
            r#"EXAMPLES:
  entity-gql query user.json -n getUser --params '{"id": 5}'
  entity-gql query - -n users < users.json
  entity-gql query user.json -n getUser --raw-params 'id: $id'"#,
        )
        .arg(name_arg())
        .arg(params_arg())
        .arg(raw_params_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_selector_args(cmd)
}

/// Compile a selector into a selection-set body.
pub fn select_command() -> Command {
    let cmd = Command::new("select")
        .about("Compile a selector into a selection set")
        .after_help(
            r#"EXAMPLES:
  entity-gql select user.json
  entity-gql select user.json --indent '  '
  entity-gql select user.json --include id,version --depth 1"#,
        )
        .arg(indent_arg())
        .arg(include_arg())
        .arg(depth_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_selector_args(cmd)
}

/// Join raw query fragments.
pub fn fragments_command() -> Command {
    Command::new("fragments")
        .about("Join query fragments under one pair of braces")
        .after_help(
            r#"EXAMPLES:
  entity-gql fragments '{ a }' '{ b }'"#,
        )
        .arg(fragments_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Report what a selector would lose on compilation.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report relationships that cannot be compiled")
        .after_help(
            r#"EXAMPLES:
  entity-gql check user.json
  entity-gql check -s '{"relationships": [{"keyValue": "owner"}]}'"#,
        )
        .arg(color_arg());

    with_selector_args(cmd)
}
