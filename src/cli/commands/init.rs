//! Initialize command.

use console::style;

use crate::config::Settings;
use crate::ocr;

/// Initialize the data directory and database.
pub async fn cmd_init(settings: &Settings) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let ctx = settings.create_db_context()?;
    ctx.init_schema().await?;
    println!("  {} Database ready", style("✓").green());

    for tool in ["tesseract", "pdftoppm", "pdftotext", "pdfinfo"] {
        if ocr::check_binary(tool) {
            println!("  {} {} found", style("✓").green(), tool);
        } else {
            println!("  {} {} not found", style("!").yellow(), tool);
        }
    }
    println!("  {}", ocr::availability_hint());

    println!(
        "{} Initialized idscan in {}",
        style("✓").green(),
        settings.data_dir.display()
    );

    Ok(())
}
