use crate::dataset::args::WorkspaceArgs;
use crate::output::args::OutputArgs;
use crate::subsidy::args::SubsidyArgs;
use clap::Parser;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Integrate carrier policy sheets and compute net device prices"
)]
pub struct Args {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    #[command(flatten)]
    pub subsidy: SubsidyArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
