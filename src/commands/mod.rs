use clap::Args;

pub type CmdResult<T> = propfix::Result<(T, i32)>;

#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Print a JSON envelope instead of text lines
    #[arg(long)]
    pub json: bool,
}

pub mod annotate;
