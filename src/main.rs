use anyhow::Result;

use manifest_move::{app, cli};

fn main() -> Result<()> {
    let args = cli::parse();
    app::run(args)
}
