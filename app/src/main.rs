use std::io::{self, BufRead, BufWriter};
use std::rc::Rc;

use log::{error, info};

mod app;
mod error;
mod reporter;
mod rules;

use app::App;
use common::cli::cli;
use common::init_log::init_log;
use common::{RouteArgs, RouteConfig};
use error::AppError;
use reporter::{Reporter, Summary};

fn run(args: RouteArgs) -> Result<Summary, AppError> {
    let config = RouteConfig::load(&args.config)?;
    let reporter = Rc::new(Reporter::new(BufWriter::new(io::stdout())));
    let mut app = App::new(&config, args.fallback, reporter);
    info!("routing through {} rules", app.chain().len());

    let summary = if args.input.is_empty() {
        app.route_all(io::stdin().lock().lines())?
    } else {
        app.route_all(args.input.into_iter().map(Ok))?
    };

    Ok(summary)
}

fn main() {
    if let Err(e) = init_log("CHAIN_ROUTE_LOG", "chain-route.log") {
        eprintln!("chain-route: {e}");
    }

    let args = RouteArgs::from_matches(&cli().get_matches());

    let stop_code = match run(args) {
        Ok(summary) => {
            info!(
                "claimed {} lines, unclaimed {}",
                summary.claimed, summary.unclaimed
            );
            summary.exit_code()
        }
        Err(e) => {
            error!("{e}");
            eprintln!("chain-route: {e}");
            i32::from(e)
        }
    };

    std::process::exit(stop_code);
}
