use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct WorkspaceArgs {
    #[arg(
        value_name = "FILE",
        help = "Workspace file describing the datasets (toml/yaml/json)"
    )]
    pub workspace: String,

    #[arg(
        short = 'x',
        long,
        value_name = "FILE",
        help = "Excel workbook holding '#Sheet' dataset sources; overrides settings.xlsx"
    )]
    pub xlsx: Option<String>,

    #[arg(
        short = 'i',
        long,
        value_name = "ID",
        help = "Integrated dataset to fill; defaults to the first one in the workspace"
    )]
    pub integrated: Option<String>,

    #[arg(
        long,
        help = "Clear integrated cells the matcher cannot resolve instead of keeping manual values",
        default_value_t = false
    )]
    pub overwrite: bool,
}
