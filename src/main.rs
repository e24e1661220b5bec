//! Command-line signing and verification with the environment-configured secret.
//! Used by: binary entrypoint.

use authtoken::{Payload, TokenService};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "authtoken", about = "Sign and verify authentication tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign a JSON object payload and print the token
    Sign { payload: String },
    /// Verify a token and print its payload
    Verify { token: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let service = TokenService::from_env();

    match cli.command {
        Command::Sign { payload } => {
            let payload: Payload = serde_json::from_str(&payload)?;
            println!("{}", service.sign(&payload)?);
        }
        Command::Verify { token } => {
            let payload = service.verify(&token)?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}
