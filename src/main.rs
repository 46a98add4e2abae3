//! Local server for testing the static contact form.
//!
//! Run it from the directory holding the contact page, then open
//! `http://localhost:8000`. Submissions are echoed to this terminal.

use std::net::SocketAddr;

use form_echo::{PORT, Server};

#[tokio::main]
async fn main() {
    println!("Starting local server for contact form testing...");
    println!("Server will run at: http://localhost:{PORT}");
    println!("Form submissions will be logged to this terminal");
    println!("Press Ctrl+C to stop the server");
    println!("{}", "-".repeat(60));

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    match Server::bind(addr).await {
        Ok(server) => {
            println!("Server started successfully!");
            println!("Open your browser to: http://localhost:{PORT}");
            println!("{}", "-".repeat(60));

            match server.serve().await {
                Ok(()) => println!("\nServer stopped by user"),
                Err(e) => println!("Server error: {e}"),
            }
        }
        Err(e) if e.is_addr_in_use() => {
            println!(
                "Port {PORT} is already in use. Try a different port or stop the existing server."
            );
        }
        Err(e) => {
            println!("Error starting server: {e}");
        }
    }
}
