use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        default_value = "out",
        help = "Output directory for the JSON report"
    )]
    pub out: String,

    #[arg(
        long,
        value_name = "STR",
        default_value = "",
        help = "Optional prefix to prepend to the dataset id in the output filename"
    )]
    pub prefix: String,

    #[arg(
        long,
        value_name = "STR",
        default_value = "",
        help = "Optional suffix to append to the dataset id in the output filename"
    )]
    pub suffix: String,

    #[arg(long, help = "Skip writing the JSON report", default_value_t = false)]
    pub no_report: bool,

    #[arg(long, help = "Print the per-cell price table", default_value_t = false)]
    pub detailed: bool,

    #[arg(short = 'q', long, help = "Only log warnings and errors", default_value_t = false)]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Log debug details", default_value_t = false)]
    pub verbose: bool,
}
