fn main() {
    suitegen::app::cli::run();
}
