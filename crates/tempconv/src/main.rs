use crate::prelude::*;
use clap::Parser;

mod convert;
mod error;
mod list;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert temperatures between Celsius, Fahrenheit, Kelvin and Reamur"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TEMPCONV_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the web form and JSON API
    Serve(crate::server::App),

    /// Convert a single temperature value
    Convert(crate::convert::App),

    /// List the supported conversion types
    List(crate::list::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();

    let default_level = if app.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    color_eyre::install()?;

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Convert(sub_app) => crate::convert::run(sub_app, app.global).await,
        SubCommands::List(sub_app) => crate::list::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
