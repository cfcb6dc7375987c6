use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use tracing::{info, warn};

use crate::errors::ModelError;

/// Build a client for `uri` and hand back the named database.
///
/// The driver connects lazily; nothing is sent to the server here.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, ModelError> {
    let mut opts = ClientOptions::parse(uri).await?;
    opts.app_name = Some("hotel_room".to_string());
    let client = Client::with_options(opts)?;
    Ok(client.database(db_name))
}

/// Round-trip a `ping` so startup logs whether the store is reachable.
pub async fn ping(db: &Database) -> bool {
    match db.run_command(doc! { "ping": 1 }, None).await {
        Ok(_) => {
            info!(db = %db.name(), "connected to document store");
            true
        }
        Err(e) => {
            warn!(db = %db.name(), error = %e, "document store ping failed");
            false
        }
    }
}
