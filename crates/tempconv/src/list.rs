use crate::prelude::{println, *};
use prettytable::row;
use tempconv_core::ConversionSelector;

#[derive(Debug, clap::Args)]
#[command(about = "List the supported conversion types")]
pub struct App {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    if app.json {
        println!("{}", render_json(ConversionSelector::all())?);
    } else {
        build_table(ConversionSelector::all()).printstd();
    }

    Ok(())
}

fn render_json(selectors: &[ConversionSelector]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(selectors)
}

fn build_table(selectors: &[ConversionSelector]) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(row!["#", "CONVERSION", "FROM", "TO"]);

    for (idx, selector) in selectors.iter().enumerate() {
        table.add_row(row![
            idx + 1,
            selector.label(),
            selector.source().symbol().trim(),
            selector.target().symbol().trim()
        ]);
    }

    table
}
