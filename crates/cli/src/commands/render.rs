use anyhow::Context;
use clap::Args;
use std::io::Read;
use zonectl_domain::RecordContent;

#[derive(Args)]
pub struct RenderArgs {
    /// JSON content array as returned by the API; `-` reads stdin
    pub content: String,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let json = if args.content == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read content from stdin")?;
        buf
    } else {
        args.content
    };

    let content: RecordContent =
        serde_json::from_str(&json).context("Content must be a JSON array")?;
    println!("{}", content);
    Ok(())
}
