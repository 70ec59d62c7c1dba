use super::args::*;

pub(crate) mod dashboard;
pub(crate) mod run;
pub(crate) mod sheet;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::Dashboard(args) => dashboard::run(args),
        Command::Sheet(args) => sheet::run(args),
    }
}
