fn main() {
    infeready::app::init_logging();
    infeready::app::cli::run();
}
