mod cli;

fn main() {
    if let Err(e) = cli::run() {
        tracing::debug!(code = e.code(), "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
