//! Configuration section definitions.
//!
//! Each module corresponds to a section in `unfurls.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `site`    | `[site]`     | Site URL, name, locale, summaries    |
//! | `unfurls` | `[unfurls]`  | Lede defaults and per-network flags  |

mod site;
mod unfurls;

pub use site::{DEFAULT_SUMMARY_MAX_WORDS, SiteSectionConfig};
pub use unfurls::UnfurlsConfig;
