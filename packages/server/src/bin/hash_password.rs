//! Generate (or check) a password hash for seeding admin users.
//!
//! hash_password <password>
//! hash_password <password> --verify <hash>

use anyhow::{anyhow, Result};
use clap::Parser;
use platesync_core::common::password::{hash_password, verify_password};

#[derive(Parser)]
#[command(name = "hash_password")]
#[command(about = "Generate an Argon2id password hash")]
struct Cli {
    /// Password to hash
    password: String,

    /// Check the password against this hash instead of generating one
    #[arg(long)]
    verify: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.verify {
        Some(hash) => {
            if verify_password(&cli.password, &hash) {
                println!("Password matches");
                Ok(())
            } else {
                Err(anyhow!("Password does not match hash"))
            }
        }
        None => {
            let hash = hash_password(&cli.password)
                .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
            println!("{}", hash);
            Ok(())
        }
    }
}
