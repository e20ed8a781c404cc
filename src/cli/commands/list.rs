//! List processed cards.

use std::sync::Arc;

use console::style;

use crate::config::Settings;
use crate::services::CardService;

/// Print stored cards, newest first.
pub async fn cmd_list(settings: &Settings, limit: i64) -> anyhow::Result<()> {
    let ctx = settings.create_db_context()?;
    ctx.init_schema().await?;
    let service = CardService::new(ctx.cards(), Arc::new(settings.clone()));

    let cards = service.list(0, Some(limit)).await?;
    if cards.is_empty() {
        println!("No cards stored yet.");
        return Ok(());
    }

    let total = service.count().await?;
    println!(
        "{:<36}  {:<16}  {:<20}  {}",
        style("ID").bold(),
        style("TYPE").bold(),
        style("NAME").bold(),
        style("CREATED").bold()
    );
    for card in &cards {
        println!(
            "{:<36}  {:<16}  {:<20}  {}",
            card.id,
            card.card_type.as_str(),
            card.name.as_deref().unwrap_or("-"),
            card.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!("\n{} of {} cards", cards.len(), total);

    Ok(())
}
