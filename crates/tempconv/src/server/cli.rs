#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Run the web form and JSON API")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "TEMPCONV_HOST", default_value = "0.0.0.0")]
    pub host: String,
}
