mod commands;
mod terminal;

use commands::{CommandLine, run};
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.to_config();

    print::header("gateway failover", cfg.quiet);
    run::run(commands.gateways, &cfg).await
}
