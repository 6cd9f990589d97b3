fn main() {
    bto::app::cli::run();
}
