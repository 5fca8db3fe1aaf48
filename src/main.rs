fn main() {
    update_manifest::run_cli();
}
