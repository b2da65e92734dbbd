fn main() -> anyhow::Result<()> {
    dlcdict::cli::run_cli()
}
