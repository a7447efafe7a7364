use tcdoc::cli;

fn main() {
    cli::run();
}
