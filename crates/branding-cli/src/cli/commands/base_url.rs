//! `branding base-url` – print the site's base URL.

use super::SiteContext;

pub fn run_base_url(ctx: &SiteContext, host: Option<&str>, is_secure: bool) {
    println!("{}", ctx.service(host).base_url(is_secure));
}
