//! # Formats Command Implementation
//!
//! Prints the supported format aliases, the canonical identifier each one
//! resolves to, and the create endpoint a provision run would target.
//! Useful when writing a manifest by hand.

use anyhow::Result;

use nexus_provision::api;
use nexus_provision::formats::{CanonicalFormat, ALIASES};
use nexus_provision::output::{emoji, OutputConfig};

/// Execute the `formats` command.
pub fn execute(color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    println!("{} Supported repository formats:", emoji(&out, "📦", "[INFO]"));
    println!();

    for format in CanonicalFormat::ALL {
        let mut aliases: Vec<&str> = ALIASES
            .iter()
            .filter(|(_, f)| *f == format)
            .map(|(alias, _)| *alias)
            .collect();
        aliases.sort_unstable();

        println!(
            "   {:<10} aliases: {:<18} endpoint: {}",
            format.as_str(),
            aliases.join(", "),
            api::proxy_create_path(format)
        );
    }

    Ok(())
}
