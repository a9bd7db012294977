use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use tempconv_core::api::{process_convert, ConvertResponse};

#[derive(Debug, clap::Args)]
#[command(about = "Convert a single temperature value")]
pub struct App {
    /// Temperature to convert (e.g. "25", "-40", "98.6")
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Conversion type, one of the names printed by `tempconv list`
    #[arg(
        short = 't',
        long = "type",
        value_name = "CONVERSION",
        env = "TEMPCONV_CONVERSION",
        default_value = "Celcius ke Fahrenheit"
    )]
    pub conversion_type: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Converting {:?} using {:?}", app.value, app.conversion_type);
    }

    // Routed through the same processing as `POST /convert`.
    let body = serde_json::json!({
        "temperature": app.value,
        "conversion_type": app.conversion_type,
    });

    match process_convert(&body) {
        Ok(response) => {
            if app.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", format_response_text(&response));
            }
            Ok(())
        }
        Err(err) => {
            if app.json {
                println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            }
            Err(Error::Rejected(err.to_string()).into())
        }
    }
}

fn format_response_text(response: &ConvertResponse) -> String {
    format!("{}", response.formatted_result.bright_cyan().bold())
}
