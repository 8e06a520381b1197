//! Webhook commands.

use clap::Subcommand;
use console::style;

use cz_core::config::AppConfig;
use cz_core::error::CzResult;
use cz_models::Webhook;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum WebhooksAction {
    /// List all webhooks.
    List,
    /// Register a webhook.
    Create {
        /// Webhook name.
        name: String,
        /// Target URL.
        url: String,
        /// Event to subscribe to (repeatable).
        #[arg(short, long = "event", required = true)]
        events: Vec<String>,
        /// HTTP method for the outbound call.
        #[arg(short, long, default_value = "POST")]
        method: String,
    },
    /// Replace a webhook's definition.
    Update {
        /// Webhook ID.
        webhook: String,
        /// Webhook name.
        name: String,
        /// Target URL.
        url: String,
        /// Event to subscribe to (repeatable).
        #[arg(short, long = "event", required = true)]
        events: Vec<String>,
        /// HTTP method for the outbound call.
        #[arg(short, long, default_value = "POST")]
        method: String,
    },
    /// Delete a webhook.
    Delete {
        /// Webhook ID.
        webhook: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(config: &AppConfig, action: WebhooksAction, format: OutputFormat) -> CzResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        WebhooksAction::List => {
            let hooks = api.webhooks().await?;
            match format {
                OutputFormat::Json => super::print_json(&hooks)?,
                OutputFormat::Text => {
                    if hooks.is_empty() {
                        println!("No webhooks registered.");
                    } else {
                        let mut table =
                            super::new_table(vec!["ID", "Name", "Method", "URL", "Events"]);
                        for h in &hooks {
                            table.add_row(vec![
                                h.uuid.clone(),
                                h.name.clone(),
                                h.method.clone(),
                                super::truncate(&h.url, 40),
                                h.events.join(", "),
                            ]);
                        }
                        println!("{table}");
                    }
                }
            }
        }
        WebhooksAction::Create { name, url, events, method } => {
            let created = api
                .create_webhook(&Webhook::new(name, url, events, method))
                .await?;
            print_webhook(&created, format)?;
        }
        WebhooksAction::Update { webhook, name, url, events, method } => {
            let mut hook = Webhook::new(name, url, events, method);
            hook.uuid = webhook.clone();
            let updated = api.update_webhook(&webhook, &hook).await?;
            print_webhook(&updated, format)?;
        }
        WebhooksAction::Delete { webhook, yes } => {
            if !super::confirm(&format!("Delete webhook {webhook}?"), yes) {
                println!("  Delete cancelled.");
                return Ok(());
            }
            api.delete_webhook(&webhook).await?;
            println!("  {} Deleted webhook {webhook}", style("OK").green().bold());
        }
    }

    Ok(())
}

fn print_webhook(h: &Webhook, format: OutputFormat) -> CzResult<()> {
    match format {
        OutputFormat::Json => super::print_json(h)?,
        OutputFormat::Text => {
            println!("{}", style("Webhook").bold().underlined());
            println!("  ID:      {}", h.uuid);
            println!("  Name:    {}", h.name);
            println!("  URL:     {}", h.url);
            println!("  Method:  {}", h.method);
            println!("  Events:  {}", h.events.join(", "));
        }
    }
    Ok(())
}
