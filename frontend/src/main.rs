fn main() {
    residencias_frontend::run();
}
