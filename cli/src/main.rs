mod commands;
mod terminal;

use commands::{CommandLine, map};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();
    let cfg = cli.to_config();

    logging::init_logging(cfg.quiet, cli.verbose);
    print::banner(cfg.quiet);

    map::map(&cli.input, &cfg)
}
