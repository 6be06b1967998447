use clap::Parser;

fn main() {
    use tomiko_revoke::util::cli::*;

    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let opts = Options::parse();
    if let Err(e) = run_cli_action(opts) {
        eprintln!("tomiko-revoke: {}", e);
        std::process::exit(1);
    }
}
