use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::GlobalArgs;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(version = VERSION)]
#[command(about = "Apply the BASA branding edit plan to a static HTML file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the branding plan to an HTML file, rewriting it in place
    Apply(commands::apply::ApplyArgs),
    /// List the plan's rules in application order
    Rules(commands::rules::RulesArgs),
}

fn wants_json(command: &Commands) -> bool {
    match command {
        Commands::Apply(args) => args.json,
        Commands::Rules(args) => args.json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let exit_code = if wants_json(&cli.command) {
        let (json_result, exit_code) = commands::run_json(cli.command, &global);
        output::print_json_result(json_result);
        exit_code
    } else {
        match commands::run_raw(cli.command, &global) {
            Ok((content, exit_code)) => {
                print!("{}", content);
                exit_code
            }
            Err(err) => {
                output::print_json_result(Err(err));
                1
            }
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
