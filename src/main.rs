use pyvet::cli::run_cli;

fn main() {
    run_cli();
}
