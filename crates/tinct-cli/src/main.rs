use anyhow::Result;

fn main() -> Result<()> {
    tinct_cli::run()
}
