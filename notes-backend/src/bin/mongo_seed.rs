//! One-off seeding utility: inserts a single sample note into MongoDB.
//!
//! Not wired to the HTTP service in any way. The document schema has no
//! `id` field; MongoDB assigns its own `_id`.
//!
//! Usage: mongo_seed <password>

use mongodb::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SeedNote {
    content: String,
    important: bool,
}

#[tokio::main]
async fn main() -> mongodb::error::Result<()> {
    let password = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            println!("give password as argument");
            std::process::exit(1);
        }
    };

    let url = format!(
        "mongodb+srv://sandeeproutdeveloper:{}@cluster0.q04ob.mongodb.net/testNoteApp?retryWrites=true&w=majority",
        password
    );

    let client = Client::with_uri_str(&url).await?;
    let notes = client.database("testNoteApp").collection::<SeedNote>("notes");

    notes
        .insert_one(
            SeedNote {
                content: "CSS is fun".to_string(),
                important: false,
            },
            None,
        )
        .await?;

    println!("note saved!");
    Ok(())
}
