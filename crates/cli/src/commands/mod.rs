pub mod build;
pub mod decode;
pub mod render;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    /// Decode record text into the API content array
    Decode(decode::DecodeArgs),
    /// Render an API content array back into record text
    Render(render::RenderArgs),
    /// Build an RRSet and print the request that would create it
    Build(build::BuildArgs),
}
