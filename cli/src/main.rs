mod commands;
mod terminal;

use commands::{CommandLine, Commands, events, hosts, summary};
use nessus_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.options.quiet);

    let cfg = Config::from(&commands.options);
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Hosts { file } => {
            print::header("host overview", cfg.quiet);
            hosts::hosts(&file, &cfg)
        }
        Commands::Events {
            file,
            severity,
            host,
        } => {
            print::header("findings", cfg.quiet);
            events::events(&file, severity, host.as_deref(), &cfg)
        }
        Commands::Summary { file } => {
            print::header("report summary", cfg.quiet);
            summary::summary(&file, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
