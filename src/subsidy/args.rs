use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SubsidyArgs {
    #[arg(
        short = 's',
        long,
        value_name = "FILE",
        help = "Public subsidy snapshot (JSON); overrides settings.subsidy"
    )]
    pub subsidy: Option<String>,
}
