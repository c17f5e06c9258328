use crate::models::RecipeDocument;
use mongodb::{Client, Collection};

pub const DATABASE_NAME: &str = "recipeDB";
pub const RECIPES_COLLECTION: &str = "recipes";

/// Handle to the document store, built once at startup and injected into the
/// handler layer through axum state.
pub struct Db {
    client: Client,
    pub recipes: Collection<RecipeDocument>,
}

impl Db {
    /// Parses the connection string and prepares the typed collection handle.
    /// The driver connects lazily, so an unreachable server surfaces as
    /// request-time errors rather than a startup failure.
    pub async fn connect(url: &str) -> mongodb::error::Result<Db> {
        let client = Client::with_uri_str(url).await?;
        let recipes = client
            .database(DATABASE_NAME)
            .collection(RECIPES_COLLECTION);

        Ok(Db { client, recipes })
    }

    /// Tears down the connection pool.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
