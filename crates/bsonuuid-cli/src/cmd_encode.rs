/// Implementation of `bsonuuid encode`.
///
/// Prints the 16-byte payload as 32 lowercase hex digits:
///
/// ```text
/// $ bsonuuid encode 123e4567-e89b-12d3-a456-426614174000 --subtype legacy
/// d3129be867453e1200401714664256a4
/// ```
use anyhow::{Context, Result};
use bsonuuid_codec::{Uuid, encode};

use crate::EncodeArgs;

/// Run the `bsonuuid encode` command.
///
/// # Errors
///
/// Returns an error if the UUID text cannot be parsed.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let uuid =
        Uuid::parse_str(&args.uuid).with_context(|| format!("invalid UUID {:?}", args.uuid))?;
    println!("{}", hex::encode(encode(&uuid, args.subtype)));
    Ok(())
}
