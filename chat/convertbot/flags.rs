use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt, PartialEq)]
pub struct Opt {
    #[structopt(
        long = "config",
        help = "path to a TOML file with endpoint, base_currency and timeout_secs"
    )]
    pub config: Option<PathBuf>,

    #[structopt(
        long = "base",
        help = "base currency for every rate fetch; overrides the config file"
    )]
    pub base: Option<String>,
}
