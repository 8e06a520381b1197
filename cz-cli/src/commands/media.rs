//! Media commands.

use clap::Subcommand;
use console::style;

use cz_core::config::AppConfig;
use cz_core::error::CzResult;
use cz_models::Media;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum MediaAction {
    /// List all media.
    List,
    /// Show media metadata.
    Get {
        /// Media ID.
        media: String,
    },
    /// Upload a local file.
    Upload {
        /// Path of the file to upload.
        path: String,
    },
    /// Change the alt text of a media file.
    Update {
        /// Media ID.
        media: String,
        /// New alt text.
        #[arg(short, long)]
        alt_text: String,
    },
    /// Download a media file.
    Download {
        /// Media ID.
        media: String,
        /// Output file path (defaults to the media ID).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Delete a media file.
    Delete {
        /// Media ID.
        media: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(config: &AppConfig, action: MediaAction, format: OutputFormat) -> CzResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        MediaAction::List => {
            let all = api.media_list().await?;
            match format {
                OutputFormat::Json => super::print_json(&all)?,
                OutputFormat::Text => {
                    if all.is_empty() {
                        println!("No media found.");
                    } else {
                        let mut table = super::new_table(vec!["ID", "Alt Text", "URL"]);
                        for m in &all {
                            table.add_row(vec![
                                m.uuid.clone(),
                                super::truncate(&m.alt_text, 30),
                                m.url.clone(),
                            ]);
                        }
                        println!("{table}");
                    }
                }
            }
        }
        MediaAction::Get { media } => {
            let m = api.media(&media).await?;
            print_media(&m, format)?;
        }
        MediaAction::Upload { path } => {
            let m = api.upload_media(&path).await?;
            print_media(&m, format)?;
        }
        MediaAction::Update { media, alt_text } => {
            let m = api.update_media(&media, &Media::with_alt_text(alt_text)).await?;
            print_media(&m, format)?;
        }
        MediaAction::Download { media, output } => {
            let path = output.unwrap_or_else(|| media.clone());
            let written = api.download_media(&media, &path).await?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({"path": path, "bytes": written}))?
                }
                OutputFormat::Text => println!(
                    "  {} Saved to {} ({})",
                    style("OK").green().bold(),
                    path,
                    super::format_bytes(written)
                ),
            }
        }
        MediaAction::Delete { media, yes } => {
            if !super::confirm(&format!("Delete media {media}?"), yes) {
                println!("  Delete cancelled.");
                return Ok(());
            }
            api.delete_media(&media).await?;
            println!("  {} Deleted media {media}", style("OK").green().bold());
        }
    }

    Ok(())
}

fn print_media(m: &Media, format: OutputFormat) -> CzResult<()> {
    match format {
        OutputFormat::Json => super::print_json(m)?,
        OutputFormat::Text => {
            println!("{}", style("Media").bold().underlined());
            println!("  ID:        {}", m.uuid);
            println!("  Alt Text:  {}", m.alt_text);
            println!("  URL:       {}", m.url);
        }
    }
    Ok(())
}
