use clap::Parser;

use lsb_media::{
    cli::{Cli, Commands},
    handler::{handle_expand, handle_hide, handle_reveal, handle_shrink},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`hide`、`reveal`、
/// `shrink` 或 `expand`）将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Reveal(args) => handle_reveal(args),
        Commands::Shrink(args) => handle_shrink(args),
        Commands::Expand(args) => handle_expand(args),
    }
}
