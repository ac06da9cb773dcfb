//! RAX File Store - Demo Driver
//!
//! Opens a store rooted at the configured directory and walks through the
//! store operations: listing, directory and file creation, read/write,
//! search, and collision rejection.

use log::{error, info};

use rax_file_store::{FileStore, StoreConfig, StoreError};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching file store demo...");

    let config = match StoreConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.create_root_if_missing {
        if let Err(e) = std::fs::create_dir_all(&config.root_dir) {
            error!("Failed to create store root {}: {}", config.root_dir, e);
            std::process::exit(1);
        }
    }

    let store = match FileStore::open(&config.root_dir) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open store at {}: {}", config.root_dir, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_demo(&store) {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run_demo(store: &FileStore) -> Result<(), StoreError> {
    println!("Store root: {}", store.root().display());

    println!("\n1. Listing root directory:");
    let listing = store.list("/")?;
    println!("   Files: {:?}", listing.files);
    println!("   Directories: {:?}", listing.directories);

    println!("\n2. Creating directories:");
    match store.create_directory("/", "demo_dir") {
        Ok(path) => println!("   Created {}", path),
        Err(e) => println!("   Error: {}", e),
    }
    match store.create_directory("demo_dir", "sub_dir") {
        Ok(path) => println!("   Created {}", path),
        Err(e) => println!("   Error: {}", e),
    }

    println!("\n3. Creating files:");
    match store.create_file("/", "demo_file.txt", "Hello, World!\nThis is a demo file.") {
        Ok(path) => println!("   Created {}", path),
        Err(e) => println!("   Error: {}", e),
    }
    match store.create_file("demo_dir", "sub_file.txt", "Content in subdirectory") {
        Ok(path) => println!("   Created {}", path),
        Err(e) => println!("   Error: {}", e),
    }

    println!("\n4. Listing root directory after creating entries:");
    let listing = store.list("/")?;
    println!("   Files: {:?}", listing.files);
    println!("   Directories: {:?}", listing.directories);

    println!("\n5. Reading demo_file.txt:");
    println!("   {:?}", store.read("demo_file.txt")?);

    println!("\n6. Overwriting and re-reading demo_file.txt:");
    store.write("demo_file.txt", "Hello again")?;
    println!("   {:?}", store.read("demo_file.txt")?);

    println!("\n7. Searching for 'demo':");
    for result in store.search("demo", "/")? {
        let hit = result?;
        println!("   {} ({}) at {}", hit.name, hit.kind, hit.path);
    }

    println!("\n8. Name collision detection:");
    match store.create_file("demo_dir", "sub_dir", "should fail") {
        Err(e @ StoreError::NameCollision { .. }) => println!("   Rejected: {}", e),
        Err(e) => return Err(e),
        Ok(path) => println!("   ERROR: collision not detected, created {}", path),
    }

    Ok(())
}
