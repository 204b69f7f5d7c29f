use fibseq_cli::run;

fn main() -> anyhow::Result<()> {
    run()
}
