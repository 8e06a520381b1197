//! Document commands.

use clap::Subcommand;
use console::style;
use serde_json::{Map, Value};

use cz_core::config::AppConfig;
use cz_core::error::CzResult;
use cz_models::{Document, DocumentState};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum DocumentsAction {
    /// List all documents in a collection (requires a token).
    List {
        /// Collection ID.
        collection: String,
    },
    /// List published documents of a public collection.
    ListPublic {
        /// Collection ID.
        collection: String,
    },
    /// Get one published document of a public collection.
    GetPublic {
        /// Collection ID.
        collection: String,
        /// Document ID.
        document: String,
    },
    /// Create a document.
    Create {
        /// Collection ID.
        collection: String,
        /// Document payload as inline JSON or a path to a JSON file.
        #[arg(short, long)]
        payload: String,
        /// Language tag.
        #[arg(short, long, default_value = "en")]
        lang: String,
        /// Document state (draft, published, ...).
        #[arg(short, long, default_value = "draft")]
        state: String,
    },
    /// Replace a document's payload.
    Update {
        /// Collection ID.
        collection: String,
        /// Document ID.
        document: String,
        /// Document payload as inline JSON or a path to a JSON file.
        #[arg(short, long)]
        payload: String,
        /// Language tag.
        #[arg(short, long, default_value = "en")]
        lang: String,
        /// Document state (draft, published, ...).
        #[arg(short, long, default_value = "draft")]
        state: String,
    },
    /// Delete a document.
    Delete {
        /// Collection ID.
        collection: String,
        /// Document ID.
        document: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(
    config: &AppConfig,
    action: DocumentsAction,
    format: OutputFormat,
) -> CzResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        DocumentsAction::List { collection } => {
            let docs = api.documents(&collection).await?;
            print_documents(&docs, format)?;
        }
        DocumentsAction::ListPublic { collection } => {
            let docs = api.public_documents(&collection).await?;
            print_documents(&docs, format)?;
        }
        DocumentsAction::GetPublic { collection, document } => {
            let doc = api.public_document(&collection, &document).await?;
            print_document(&doc, format)?;
        }
        DocumentsAction::Create { collection, payload, lang, state } => {
            let payload: Map<String, Value> = super::load_json(&payload)?;
            let doc = Document::new(lang, DocumentState::from(state), payload);
            let created = api.create_document(&collection, &doc).await?;
            print_document(&created, format)?;
        }
        DocumentsAction::Update { collection, document, payload, lang, state } => {
            let payload: Map<String, Value> = super::load_json(&payload)?;
            let mut doc = Document::new(lang, DocumentState::from(state), payload);
            doc.uuid = document.clone();
            let updated = api.update_document(&collection, &document, &doc).await?;
            print_document(&updated, format)?;
        }
        DocumentsAction::Delete { collection, document, yes } => {
            if !super::confirm(&format!("Delete document {document}?"), yes) {
                println!("  Delete cancelled.");
                return Ok(());
            }
            api.delete_document(&collection, &document).await?;
            println!("  {} Deleted document {document}", style("OK").green().bold());
        }
    }

    Ok(())
}

fn print_documents(docs: &[Document], format: OutputFormat) -> CzResult<()> {
    match format {
        OutputFormat::Json => super::print_json(docs)?,
        OutputFormat::Text => {
            if docs.is_empty() {
                println!("No documents found.");
                return Ok(());
            }
            let mut table = super::new_table(vec!["ID", "Lang", "State", "Payload"]);
            for doc in docs {
                let payload = serde_json::to_string(&doc.payload).unwrap_or_default();
                table.add_row(vec![
                    doc.uuid.clone(),
                    doc.lang.clone(),
                    doc.state.to_string(),
                    super::truncate(&payload, 60),
                ]);
            }
            println!("{table}");
            println!("\n{} documents", docs.len());
        }
    }
    Ok(())
}

fn print_document(doc: &Document, format: OutputFormat) -> CzResult<()> {
    match format {
        OutputFormat::Json => super::print_json(doc)?,
        OutputFormat::Text => {
            println!("{}", style("Document").bold().underlined());
            println!("  ID:        {}", doc.uuid);
            println!("  Lang:      {}", doc.lang);
            println!("  State:     {}", doc.state);
            println!("  Payload:");
            println!("{}", serde_json::to_string_pretty(&doc.payload)?);
        }
    }
    Ok(())
}
