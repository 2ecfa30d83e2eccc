//! tag-replacer binary entry point

use anyhow::Result;

fn main() -> Result<()> {
    tag_replacer::cli::run()
}
