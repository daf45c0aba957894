fn main() {
    phase_prompt::app::cli::run();
}
