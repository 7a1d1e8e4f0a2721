use filerobot_api::models::files::ListFilesParams;
use filerobot_api::{Client, ClientConfig, FilesApi, FoldersApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("FILEROBOT_API_KEY")?;
    let client = Client::new(ClientConfig::new(api_key));

    // List the first page of files
    println!("Listing files...");
    let listing = client.list_files(&ListFilesParams::default()).await?;
    if let Some(files) = listing["files"].as_array() {
        println!("Found {} files:", files.len());
        for file in files {
            println!(
                "  {} ({})",
                file["name"].as_str().unwrap_or("?"),
                file["uuid"].as_str().unwrap_or("?")
            );
        }
    }

    // Create a folder and move the first file into it
    println!("\nCreating folder...");
    let folder = client.create_folder("Demo").await?;
    let folder_id = folder["folder"]["uuid"].as_str().unwrap_or_default();
    println!("Created folder Demo ({})", folder_id);

    if let Some(first) = listing["files"]
        .as_array()
        .and_then(|files| files.first())
        .and_then(|file| file["uuid"].as_str())
    {
        println!("\nMoving {} into Demo...", first);
        client.move_file(first, folder_id).await?;
    }

    // Upload something small without touching the disk
    println!("\nUploading inline bytes...");
    let uploaded = client
        .upload_file_binary_bytes("hello.txt", b"hello filerobot")
        .await?;
    println!("Upload response: {uploaded:#}");

    // Clean up
    println!("\nDeleting folder...");
    client.delete_folder(folder_id).await?;
    println!("Done!");

    Ok(())
}
