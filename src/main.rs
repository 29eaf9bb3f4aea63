use dirclean::cli::args::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse_or_exit();
    dirclean::cli::setup_tracing(&cli);
    dirclean::cli::run(cli)
}
