//! Collection commands.

use clap::Subcommand;
use console::style;

use cz_core::config::AppConfig;
use cz_core::error::CzResult;
use cz_models::{Collection, CollectionField};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum CollectionsAction {
    /// List all collections.
    List,
    /// Show a collection and its fields.
    Get {
        /// Collection ID.
        collection: String,
    },
    /// Create a collection from inline JSON or a JSON file.
    Create {
        /// Collection definition.
        definition: String,
    },
    /// Update a collection from inline JSON or a JSON file.
    Update {
        /// Collection ID.
        collection: String,
        /// Collection definition.
        definition: String,
    },
    /// Delete a collection.
    Delete {
        /// Collection ID.
        collection: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the collection schema.
    Schema {
        /// Collection ID.
        collection: String,
    },
    /// List the field definitions of a collection.
    Fields {
        /// Collection ID.
        collection: String,
    },
    /// List the available field types.
    FieldTypes,
}

pub async fn run(
    config: &AppConfig,
    action: CollectionsAction,
    format: OutputFormat,
) -> CzResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        CollectionsAction::List => {
            let cols = api.collections().await?;
            match format {
                OutputFormat::Json => super::print_json(&cols)?,
                OutputFormat::Text => {
                    if cols.is_empty() {
                        println!("No collections found.");
                    } else {
                        let mut table = super::new_table(vec![
                            "ID",
                            "Name",
                            "Display Name",
                            "Public",
                            "Fields",
                        ]);
                        for c in &cols {
                            table.add_row(vec![
                                c.uuid.clone(),
                                c.name.clone(),
                                super::truncate(&c.display_name, 30),
                                if c.is_public { "yes".into() } else { "-".to_string() },
                                c.fields.len().to_string(),
                            ]);
                        }
                        println!("{table}");
                    }
                }
            }
        }
        CollectionsAction::Get { collection } => {
            let col = api.collection(&collection).await?;
            print_collection(&col, format)?;
        }
        CollectionsAction::Create { definition } => {
            let col: Collection = super::load_json(&definition)?;
            let created = api.create_collection(&col).await?;
            print_collection(&created, format)?;
        }
        CollectionsAction::Update { collection, definition } => {
            let col: Collection = super::load_json(&definition)?;
            let updated = api.update_collection(&collection, &col).await?;
            print_collection(&updated, format)?;
        }
        CollectionsAction::Delete { collection, yes } => {
            println!(
                "  {} Deleting a collection also deletes its documents.",
                style("WARNING").red().bold()
            );
            if !super::confirm(&format!("Delete collection {collection}?"), yes) {
                println!("  Delete cancelled.");
                return Ok(());
            }
            api.delete_collection(&collection).await?;
            println!("  {} Deleted collection {collection}", style("OK").green().bold());
        }
        CollectionsAction::Schema { collection } => {
            // The schema shape is service-defined; always print it as JSON.
            let schema = api.collection_schema(&collection).await?;
            super::print_json(&schema)?;
        }
        CollectionsAction::Fields { collection } => {
            let fields = api.collection_fields(&collection).await?;
            print_fields(&fields, format)?;
        }
        CollectionsAction::FieldTypes => {
            let types = api.field_types().await?;
            match format {
                OutputFormat::Json => super::print_json(&types)?,
                OutputFormat::Text => {
                    for t in &types {
                        println!("  {t}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_collection(col: &Collection, format: OutputFormat) -> CzResult<()> {
    match format {
        OutputFormat::Json => super::print_json(col)?,
        OutputFormat::Text => {
            println!("{}", style("Collection").bold().underlined());
            println!("  ID:           {}", col.uuid);
            println!("  Name:         {}", col.name);
            println!("  Display Name: {}", col.display_name);
            if !col.description.is_empty() {
                println!("  Description:  {}", col.description);
            }
            println!("  Public:       {}", col.is_public);
            if !col.fields.is_empty() {
                println!();
                print_fields(&col.fields, OutputFormat::Text)?;
            }
        }
    }
    Ok(())
}

fn print_fields(fields: &[CollectionField], format: OutputFormat) -> CzResult<()> {
    match format {
        OutputFormat::Json => super::print_json(fields)?,
        OutputFormat::Text => {
            let mut table =
                super::new_table(vec!["Name", "Type", "Display Name", "Required", "Unique"]);
            for f in fields {
                table.add_row(vec![
                    f.name.clone(),
                    f.field_type.clone(),
                    f.display_name.clone(),
                    if f.required { "yes".into() } else { "-".to_string() },
                    if f.unique { "yes".into() } else { "-".to_string() },
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
