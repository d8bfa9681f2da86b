//! Interactive entry point
//!
//! Prompts for a thread link and an output filename, walks the thread, and
//! binds its photos into a PDF. Any error terminates the process with a
//! non-zero status and a diagnostic on stderr.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use threadbind::utils::parse_status_id;
use threadbind::{ApiClient, Config, PdfAssembler, StatusId, ThreadWalker};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> threadbind::Result<()> {
    let config = Config::from_env();
    let client = ApiClient::new(&config)?;
    let walker = ThreadWalker::new(&client);

    let link = prompt("Enter the link to the last reply of the thread: ")?;
    let tail_id = StatusId::new(parse_status_id(&link));

    let output = prompt("Enter the output PDF filename: ")?;
    let output = output.trim();

    let images = walker.collect(&tail_id).await?;
    if images.is_empty() {
        println!("No images found in the thread.");
        return Ok(());
    }

    PdfAssembler::new().build(images, Path::new(output))?;
    println!("Successfully converted images to {output}");
    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
