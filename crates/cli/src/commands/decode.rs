use anyhow::anyhow;
use clap::Args;
use tracing::debug;
use zonectl_domain::decode;

#[derive(Args)]
pub struct DecodeArgs {
    /// Record type (MX, CAA, SRV, HTTPS, SVCB, TXT, ...)
    #[arg(short = 't', long = "type")]
    pub record_type: String,

    /// Pretty-print the JSON array
    #[arg(long)]
    pub pretty: bool,

    /// Record text, e.g. `10 mail.example.com`
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub value: Vec<String>,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let raw = args.value.join(" ");
    let content = decode(&args.record_type, &raw).ok_or_else(|| {
        anyhow!(
            "'{}' does not fit the field layout of {} records",
            raw,
            args.record_type.to_uppercase()
        )
    })?;

    debug!(elements = content.len(), "Decoded record content");

    let json = if args.pretty {
        serde_json::to_string_pretty(&content)?
    } else {
        serde_json::to_string(&content)?
    };
    println!("{}", json);
    Ok(())
}
