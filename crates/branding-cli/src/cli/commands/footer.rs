//! `branding footer` – print the footer descriptor as JSON.

use anyhow::Result;

use super::SiteContext;

pub fn run_footer(ctx: &SiteContext, host: Option<&str>, is_secure: bool) -> Result<()> {
    let footer = ctx.service(host).footer(is_secure);
    println!("{}", serde_json::to_string_pretty(&footer)?);
    Ok(())
}
