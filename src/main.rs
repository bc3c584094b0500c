fn main() {
    testgen::cli::run();
}
