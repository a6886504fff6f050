use stagehand::cli::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        let mut causes = e.chain().skip(1).peekable();
        if causes.peek().is_some() {
            eprintln!("\nCaused by:");
            for err in causes {
                eprintln!("  {}", err);
            }
        }
        std::process::exit(1);
    }
}
