mod validate;

use crate::Cli;
use crate::CommandResult;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-templates")]
pub(crate) enum CommandEnum {
    /// Compiles every type described by one or more metadata manifests and
    /// reports any template errors.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await
        }
    }
}
