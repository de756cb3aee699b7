//! Echo the resolved query string.

use qecho::cli;
use qecho::error;
use qecho::output;

fn run_qecho(args: &cli::Cli) -> error::Result<()> {
    let mut stdout = std::io::stdout();
    output::write_query_line(&mut stdout, &args.query)
}

fn main() -> miette::Result<()> {
    let args = cli::parse();
    run_qecho(&args).map_err(|e| miette::Report::new_boxed(e))
}
